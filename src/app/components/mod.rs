pub mod attachment_button;
pub mod model_avatar;
pub mod input_bar;

pub use attachment_button::{AttachmentButton, ButtonPresentation};
pub use model_avatar::ModelAvatar;
pub use input_bar::{InputBar, InputBarProps, InputBarView};
