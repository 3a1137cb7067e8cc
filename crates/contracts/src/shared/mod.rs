pub mod signal_parser;
