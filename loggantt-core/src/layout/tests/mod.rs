mod engine_tests;
mod labels_tests;
mod reflow_tests;
