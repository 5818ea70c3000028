use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
       ───────────────────────────────
        ¬ ∧ ∨   → ⟘   ↑   ↔ ⊕ ↓   ⊤
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
       ███████ b a s i s  0.1 ███████
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
       ───────────────────────────────
"#;
pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_FORMULA: StyleId = 2;
pub(crate) const STYLE_BASIS: StyleId = 3;
pub(crate) const STYLE_REDUCED: StyleId = 4;
pub(crate) const STYLE_FAIL: StyleId = 5;

/// Separates the reductions of different formulae in the output.
pub(crate) const SEPARATOR: &str = "- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -";
