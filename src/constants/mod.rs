pub mod result_templates;
