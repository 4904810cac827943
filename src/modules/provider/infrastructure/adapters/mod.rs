pub mod maccms;

pub use maccms::{MacCmsAdapter, MacCmsMapper};
