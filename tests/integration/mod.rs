
pub mod document_pipeline;
