mod property_tests;
mod explorer_tests;
