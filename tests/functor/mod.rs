mod test_functor;
