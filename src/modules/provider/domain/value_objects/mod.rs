pub mod adult_content_policy;
pub mod site_outcome;
pub mod site_selection;
pub mod upstream_page;

pub use adult_content_policy::*;
pub use site_outcome::*;
pub use site_selection::*;
pub use upstream_page::*;
