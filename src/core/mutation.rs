// Residue mutation viewer: the closed set of variants, their SVG fragments
// and the single-selection state shared by the toggle buttons.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MutationVariant {
    WildType,
    Y33W,
    S52F,
    T28A,
}

impl MutationVariant {
    /// Parse the exact `data-mutation` value carried by a button.
    #[inline]
    pub fn from_name(name: &str) -> Option<MutationVariant> {
        match name {
            "Wild Type" => Some(MutationVariant::WildType),
            "Y33W" => Some(MutationVariant::Y33W),
            "S52F" => Some(MutationVariant::S52F),
            "T28A" => Some(MutationVariant::T28A),
            _ => None,
        }
    }
}

const WILD_TYPE_SVG: &str = r##"<circle cx="100" cy="65" r="8" fill="#64748b" class="transition-all duration-500" />
<text x="100" y="50" text-anchor="middle" fill="#475569" font-size="10" font-weight="bold">WT</text>"##;

// Tryptophan: bulky, green
const Y33W_SVG: &str = r##"<circle cx="100" cy="65" r="14" fill="#15803d" class="transition-all duration-500 animate-pulse" />
<text x="100" y="45" text-anchor="middle" fill="#15803d" font-size="12" font-weight="bold">Trp</text>
<path d="M90,75 L80,90" stroke="#15803d" stroke-width="2" />
<path d="M110,75 L120,90" stroke="#15803d" stroke-width="2" />"##;

// Phenylalanine: aromatic, blue
const S52F_SVG: &str = r##"<rect x="90" y="55" width="20" height="20" fill="#1d4ed8" class="transition-all duration-500" transform="rotate(45 100 65)" />
<text x="100" y="45" text-anchor="middle" fill="#1d4ed8" font-size="12" font-weight="bold">Phe</text>"##;

// Alanine: small, red
const T28A_SVG: &str = r##"<circle cx="100" cy="65" r="6" fill="#b91c1c" class="transition-all duration-500" />
<text x="100" y="50" text-anchor="middle" fill="#b91c1c" font-size="10" font-weight="bold">Ala</text>"##;

/// What the residue container shows. Names outside the known set render
/// nothing rather than keeping the previous glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResidueGraphic {
    Variant(MutationVariant),
    Empty,
}

impl ResidueGraphic {
    pub fn for_name(name: &str) -> ResidueGraphic {
        match MutationVariant::from_name(name) {
            Some(v) => ResidueGraphic::Variant(v),
            None => ResidueGraphic::Empty,
        }
    }

    pub fn markup(self) -> &'static str {
        match self {
            ResidueGraphic::Variant(MutationVariant::WildType) => WILD_TYPE_SVG,
            ResidueGraphic::Variant(MutationVariant::Y33W) => Y33W_SVG,
            ResidueGraphic::Variant(MutationVariant::S52F) => S52F_SVG,
            ResidueGraphic::Variant(MutationVariant::T28A) => T28A_SVG,
            ResidueGraphic::Empty => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Unselected,
    Selected(usize),
}

/// Everything the DOM layer needs to render after a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionUpdate {
    pub label: String,
    pub graphic: ResidueGraphic,
    /// False when the click landed on the button that was already selected.
    pub changed: bool,
}

/// Selection state for a fixed row of toggle buttons. Button `i` carries
/// the raw attribute value `names[i]`; a button without the attribute is
/// represented by an empty name.
#[derive(Clone, Debug)]
pub struct MutationSelector {
    names: Vec<String>,
    selection: Selection,
}

impl MutationSelector {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            selection: Selection::Unselected,
        }
    }

    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection == Selection::Selected(index)
    }

    /// Select button `index` regardless of the current state. Out of range
    /// indices leave the state untouched.
    pub fn click(&mut self, index: usize) -> Option<SelectionUpdate> {
        let name = self.names.get(index)?;
        let changed = self.selection != Selection::Selected(index);
        self.selection = Selection::Selected(index);
        Some(SelectionUpdate {
            label: name.clone(),
            graphic: ResidueGraphic::for_name(name),
            changed,
        })
    }
}
