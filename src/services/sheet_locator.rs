use log::debug;

use crate::domain::cell::{RawSheet, RawWorkbook};

/// One logical sheet and the names it may appear under, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalSheet {
    pub aliases: &'static [&'static str],
}

pub const CAPITAL: LogicalSheet = LogicalSheet {
    aliases: &["Capital_Investment", "Capital"],
};
pub const COSTS: LogicalSheet = LogicalSheet {
    aliases: &["Costs_Tracker", "Costs"],
};
pub const SHOWROOM: LogicalSheet = LogicalSheet {
    aliases: &["Showroom_Progress", "Showroom"],
};
pub const WAREHOUSE: LogicalSheet = LogicalSheet {
    aliases: &["Warehouse_Progress", "Warehouse"],
};
pub const SUPPLIERS: LogicalSheet = LogicalSheet {
    aliases: &["Suppliers"],
};
pub const FINANCIAL: LogicalSheet = LogicalSheet {
    aliases: &["Financial_Projections", "Financial"],
};
pub const RISKS: LogicalSheet = LogicalSheet {
    aliases: &["Risks_Issues", "Risks"],
};
pub const SETTINGS: LogicalSheet = LogicalSheet {
    aliases: &["Settings"],
};
pub const CASH_FLOW: LogicalSheet = LogicalSheet {
    aliases: &["Monthly_Cashflow", "Cashflow", "Cash_Flow"],
};

pub fn normalize_sheet_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds the actual sheet name matching `logical_name` once underscores and
/// whitespace are removed and case is ignored.
pub fn locate_sheet<'a, S: AsRef<str>>(logical_name: &str, sheet_names: &'a [S]) -> Option<&'a str> {
    let wanted = normalize_sheet_name(logical_name);
    sheet_names
        .iter()
        .map(|name| name.as_ref())
        .find(|name| normalize_sheet_name(name) == wanted)
}

/// Tries each alias in turn; the first that resolves wins.
pub fn locate_any<'a, S: AsRef<str>>(aliases: &[&str], sheet_names: &'a [S]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|alias| locate_sheet(alias, sheet_names))
}

impl RawWorkbook {
    pub fn find_sheet(&self, logical: LogicalSheet) -> Option<&RawSheet> {
        let names = self.sheet_names();
        let found = locate_any(logical.aliases, &names);
        match found {
            Some(name) => debug!("resolved sheet {} as '{}'", logical.aliases[0], name),
            None => debug!("sheet {} not found", logical.aliases[0]),
        }
        found.and_then(|name| self.sheet(name))
    }
}
