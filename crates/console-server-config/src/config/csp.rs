use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Content-Security-Policy directives which may be extended by console plugins.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub enum DirectiveType {
    DefaultSrc,
    ScriptSrc,
    StyleSrc,
    ImgSrc,
    FontSrc,
    ConnectSrc,
}
