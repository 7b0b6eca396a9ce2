pub mod api_client;
pub mod batch_poller;
pub mod severity_aggregator;
pub mod report_generator;
pub mod report_exporter;
