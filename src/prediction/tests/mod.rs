mod format_test;
mod formatter_test;
