// Static docking scores shown in the hero card and the cursor that cycles
// through them.
//
// The numbers are illustrative literals, not computed results. The web
// frontend writes one row every tick and then advances the cursor.

/// One column of the score card, keyed by the `data-score` attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreField {
    DockQ,
    Qs,
    Ics,
    ModFold,
}

impl ScoreField {
    pub const ALL: [ScoreField; 4] = [
        ScoreField::DockQ,
        ScoreField::Qs,
        ScoreField::Ics,
        ScoreField::ModFold,
    ];

    /// Value of the `data-score` attribute that identifies this field's node.
    #[inline]
    pub fn data_key(self) -> &'static str {
        match self {
            ScoreField::DockQ => "dockq",
            ScoreField::Qs => "qs",
            ScoreField::Ics => "ics",
            ScoreField::ModFold => "modfold",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreTuple {
    pub label: &'static str,
    pub dockq: f64,
    pub qs: f64,
    pub ics: f64,
    pub modfold: f64,
}

impl ScoreTuple {
    #[inline]
    pub fn value(&self, field: ScoreField) -> f64 {
        match field {
            ScoreField::DockQ => self.dockq,
            ScoreField::Qs => self.qs,
            ScoreField::Ics => self.ics,
            ScoreField::ModFold => self.modfold,
        }
    }

    /// Display text for `field`, always two decimals.
    #[inline]
    pub fn display(&self, field: ScoreField) -> String {
        format_score(self.value(field))
    }
}

#[inline]
pub fn format_score(value: f64) -> String {
    format!("{:.2}", value)
}

pub const SCORE_TABLE: &[ScoreTuple] = &[
    ScoreTuple {
        label: "Wild Type",
        dockq: 0.72,
        qs: 0.68,
        ics: 0.74,
        modfold: 0.65,
    },
    ScoreTuple {
        label: "Y33W",
        dockq: 0.85,
        qs: 0.92,
        ics: 0.88,
        modfold: 0.76,
    },
    ScoreTuple {
        label: "S52F",
        dockq: 0.91,
        qs: 0.87,
        ics: 0.93,
        modfold: 0.82,
    },
    ScoreTuple {
        label: "T28A",
        dockq: 0.68,
        qs: 0.71,
        ics: 0.65,
        modfold: 0.61,
    },
    ScoreTuple {
        label: "D31K",
        dockq: 0.79,
        qs: 0.84,
        ics: 0.81,
        modfold: 0.73,
    },
];

/// Circular cursor over the score table.
#[derive(Clone, Debug)]
pub struct ScoreCycler {
    table: &'static [ScoreTuple],
    cursor: usize,
}

impl ScoreCycler {
    /// Hand out the row under the cursor, then move the cursor forward.
    pub fn tick(&mut self) -> &'static ScoreTuple {
        let row = &self.table[self.cursor];
        self.cursor = (self.cursor + 1) % self.table.len();
        row
    }
}

impl Default for ScoreCycler {
    fn default() -> Self {
        Self {
            table: SCORE_TABLE,
            cursor: 0,
        }
    }
}

/// Score card nodes paired with the cycler driving them. Generic over the
/// node type so the same logic runs against DOM elements and test doubles.
#[derive(Clone, Debug)]
pub struct ScoreBoard<T> {
    nodes: [Option<T>; 4],
    cycler: ScoreCycler,
}

impl<T> ScoreBoard<T> {
    /// `nodes` is ordered like [`ScoreField::ALL`]. The whole board hangs off
    /// the `dockq` node: without it there is nothing to schedule, whatever
    /// the other nodes look like.
    pub fn new(nodes: [Option<T>; 4], cycler: ScoreCycler) -> Option<Self> {
        nodes[0].as_ref()?;
        Some(Self { nodes, cycler })
    }

    /// Advance one row and return it with the writes to perform, skipping
    /// absent nodes.
    pub fn tick(&mut self) -> (&'static ScoreTuple, Vec<(&T, String)>) {
        let row = self.cycler.tick();
        let writes = ScoreField::ALL
            .iter()
            .zip(self.nodes.iter())
            .filter_map(|(field, node)| node.as_ref().map(|n| (n, row.display(*field))))
            .collect();
        (row, writes)
    }
}
