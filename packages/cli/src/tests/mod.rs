mod commands_tests;
mod config_tests;
