pub mod batch_source;
