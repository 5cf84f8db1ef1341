mod composer_tests;
mod support;
