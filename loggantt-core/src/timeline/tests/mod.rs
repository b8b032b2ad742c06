mod sort_tests;
