use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS transform functions an animation can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// `translate3d(x, y, z)`
    Translate3d,
}

impl AnimationKind {
    /// Look up a kind by its CSS function name.
    pub fn from_css_name(name: &str) -> Option<Self> {
        match name {
            "translate3d" => Some(AnimationKind::Translate3d),
            _ => None,
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            AnimationKind::Translate3d => "translate3d",
        }
    }

    /// Number of axes the function takes.
    pub fn required_axes(self) -> usize {
        match self {
            AnimationKind::Translate3d => 3,
        }
    }

    /// Assemble `name(a,b,c)` from already formatted arguments.
    pub fn render<I, S>(self, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = format!("{}(", self.css_name());
        for (i, arg) in args.into_iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(arg.as_ref());
        }
        out.push(')');
        out
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}
