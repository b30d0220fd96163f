//! WDPA column names and table kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three WDPA tables a record set can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Protected areas delineated as polygons.
    Polygon,
    /// Protected areas reported as points.
    Point,
    /// Metadata describing where records came from.
    Source,
}

impl TableKind {
    /// All table kinds in report order.
    pub fn all() -> &'static [TableKind] {
        &[TableKind::Polygon, TableKind::Point, TableKind::Source]
    }

    /// Short label used in file names and reports.
    pub fn label(self) -> &'static str {
        match self {
            TableKind::Polygon => "poly",
            TableKind::Point => "point",
            TableKind::Source => "source",
        }
    }

    /// Parse a label, accepting a few common spellings.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "poly" | "polygon" | "polygons" => Some(TableKind::Polygon),
            "point" | "points" | "pt" => Some(TableKind::Point),
            "source" | "sources" | "metadata" => Some(TableKind::Source),
            _ => None,
        }
    }

    /// Column identifying a row of this table in reports.
    pub fn identifier_field(self) -> Field {
        match self {
            TableKind::Polygon | TableKind::Point => Field::RecordId,
            TableKind::Source => Field::MetadataId,
        }
    }

    /// Columns a well-formed table of this kind carries.
    pub fn expected_columns(self) -> Vec<&'static str> {
        match self {
            TableKind::Polygon => Field::all().iter().map(|f| f.column()).collect(),
            TableKind::Point => Field::all()
                .iter()
                .filter(|f| !f.polygon_only())
                .map(|f| f.column())
                .collect(),
            TableKind::Source => SOURCE_COLUMNS.to_vec(),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Columns of the source (metadata) table.
pub const SOURCE_COLUMNS: &[&str] = &[
    "METADATAID",
    "DATA_TITLE",
    "RESP_PARTY",
    "VERIFIER",
    "YEAR",
    "UPDATE_YR",
    "LANGUAGE",
    "CHAR_SET",
    "REF_SYSTEM",
    "SCALE",
    "LINEAGE",
    "CITATION",
    "DISCLAIMER",
];

/// A named attribute of a protected-area record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    /// `WDPAID`, shared by all parcels of one area.
    AreaGroupId,
    /// `WDPA_PID`, unique per record.
    RecordId,
    PaDef,
    Name,
    OrigName,
    Desig,
    DesigEng,
    DesigType,
    IucnCat,
    IntCrit,
    Marine,
    RepMArea,
    GisMArea,
    RepArea,
    GisArea,
    NoTake,
    NoTkArea,
    Status,
    StatusYr,
    GovType,
    OwnType,
    MangAuth,
    MangPlan,
    Verif,
    MetadataId,
    SubLoc,
    ParentIso3,
    Iso3,
}

impl Field {
    /// All record fields in the published column order.
    pub fn all() -> &'static [Field] {
        &[
            Field::AreaGroupId,
            Field::RecordId,
            Field::PaDef,
            Field::Name,
            Field::OrigName,
            Field::Desig,
            Field::DesigEng,
            Field::DesigType,
            Field::IucnCat,
            Field::IntCrit,
            Field::Marine,
            Field::RepMArea,
            Field::GisMArea,
            Field::RepArea,
            Field::GisArea,
            Field::NoTake,
            Field::NoTkArea,
            Field::Status,
            Field::StatusYr,
            Field::GovType,
            Field::OwnType,
            Field::MangAuth,
            Field::MangPlan,
            Field::Verif,
            Field::MetadataId,
            Field::SubLoc,
            Field::ParentIso3,
            Field::Iso3,
        ]
    }

    /// Column name as it appears in WDPA files.
    pub fn column(self) -> &'static str {
        match self {
            Field::AreaGroupId => "WDPAID",
            Field::RecordId => "WDPA_PID",
            Field::PaDef => "PA_DEF",
            Field::Name => "NAME",
            Field::OrigName => "ORIG_NAME",
            Field::Desig => "DESIG",
            Field::DesigEng => "DESIG_ENG",
            Field::DesigType => "DESIG_TYPE",
            Field::IucnCat => "IUCN_CAT",
            Field::IntCrit => "INT_CRIT",
            Field::Marine => "MARINE",
            Field::RepMArea => "REP_M_AREA",
            Field::GisMArea => "GIS_M_AREA",
            Field::RepArea => "REP_AREA",
            Field::GisArea => "GIS_AREA",
            Field::NoTake => "NO_TAKE",
            Field::NoTkArea => "NO_TK_AREA",
            Field::Status => "STATUS",
            Field::StatusYr => "STATUS_YR",
            Field::GovType => "GOV_TYPE",
            Field::OwnType => "OWN_TYPE",
            Field::MangAuth => "MANG_AUTH",
            Field::MangPlan => "MANG_PLAN",
            Field::Verif => "VERIF",
            Field::MetadataId => "METADATAID",
            Field::SubLoc => "SUB_LOC",
            Field::ParentIso3 => "PARENT_ISO3",
            Field::Iso3 => "ISO3",
        }
    }

    /// Look a field up by its column name (case-insensitive).
    pub fn from_column(name: &str) -> Option<Self> {
        let name = name.trim();
        Field::all()
            .iter()
            .copied()
            .find(|f| f.column().eq_ignore_ascii_case(name))
    }

    /// Fields computed from geometry, absent from the point table.
    pub fn polygon_only(self) -> bool {
        matches!(self, Field::GisMArea | Field::GisArea)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
