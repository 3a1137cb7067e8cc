pub mod condition_form;
