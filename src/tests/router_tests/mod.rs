mod details_tests;
mod favorites_tests;
