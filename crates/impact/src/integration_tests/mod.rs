mod recompute_tests;
