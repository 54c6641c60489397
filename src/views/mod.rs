pub mod chat;
pub mod disclaimer;
pub mod document;
pub mod history;
pub mod shared;

pub use chat::ChatView;
pub use disclaimer::DisclaimerModal;
pub use document::DocumentAnalysisModal;
pub use history::HistorySidebar;
