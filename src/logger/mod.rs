pub mod batch_logger;
