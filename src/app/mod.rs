// ==========================================
// 产品料号配置器 - 应用层
// ==========================================
// 职责: 会话上下文与渲染，连接界面与引擎
// ==========================================

pub mod error;
pub mod session;
pub mod state;
pub mod view;

// 重导出
pub use error::{AppError, AppResult};
pub use session::SelectionSession;
pub use state::AppState;
pub use view::{render, AttributeControl, RenderedView};
