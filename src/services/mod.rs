pub mod export_dispatcher;
pub mod file_saver;
pub mod input_collector;
pub mod result_store;

pub use export_dispatcher::ExportDispatcher;
pub use file_saver::FileSaver;
pub use input_collector::InputCollector;
pub use result_store::ResultStore;
