mod test_activations;
mod test_dropout;
