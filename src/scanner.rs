pub mod document_scanner;
