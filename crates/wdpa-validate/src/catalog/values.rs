//! Allowed-value tables from the WDPA user manual.

pub const PA_DEF: &[&str] = &["1"];

pub const DESIG_ENG_INTERNATIONAL: &[&str] = &[
    "Ramsar Site, Wetland of International Importance",
    "UNESCO-MAB Biosphere Reserve",
    "World Heritage Site (natural or mixed)",
];

pub const DESIG_ENG_REGIONAL: &[&str] = &[
    "Baltic Sea Protected Area (HELCOM)",
    "Specially Protected Area (Cartagena Convention)",
    "Marine Protected Area (CCAMLR)",
    "Marine Protected Area (OSPAR)",
    "Site of Community Importance (Habitats Directive)",
    "Special Protection Area (Birds Directive)",
    "Specially Protected Areas of Mediterranean Importance (Barcelona Convention)",
];

pub const RAMSAR_WHS_DESIG_ENG: &[&str] = &[
    "Ramsar Site, Wetland of International Importance",
    "World Heritage Site (natural or mixed)",
];

pub const UNESCO_WHS_DESIG_ENG: &[&str] = &[
    "UNESCO-MAB Biosphere Reserve",
    "World Heritage Site (natural or mixed)",
];

pub const DESIG_TYPE: &[&str] = &["National", "Regional", "International", "Not Applicable"];
pub const DESIG_TYPE_INTERNATIONAL: &[&str] = &["International"];
pub const DESIG_TYPE_REGIONAL: &[&str] = &["Regional"];

pub const IUCN_CAT: &[&str] = &[
    "Ia",
    "Ib",
    "II",
    "III",
    "IV",
    "V",
    "VI",
    "Not Reported",
    "Not Applicable",
    "Not Assigned",
];

/// IUCN categories valid outside UNESCO-MAB and World Heritage designations.
pub const IUCN_CAT_GENERAL: &[&str] = &[
    "Ia",
    "Ib",
    "II",
    "III",
    "IV",
    "V",
    "VI",
    "Not Reported",
    "Not Assigned",
];

pub const NOT_APPLICABLE: &[&str] = &["Not Applicable"];

pub const MARINE: &[&str] = &["0", "1", "2"];
pub const MARINE_TERRESTRIAL: &[&str] = &["0"];
pub const MARINE_COASTAL_OR_MARINE: &[&str] = &["1", "2"];

pub const NO_TAKE_MARINE: &[&str] = &["All", "Part", "None", "Not Reported"];
pub const ZERO_AREA: &[f64] = &[0.0];

pub const STATUS: &[&str] = &[
    "Proposed",
    "Inscribed",
    "Adopted",
    "Designated",
    "Established",
];
pub const STATUS_ESTABLISHED: &[&str] = &["Established"];

pub const GOV_TYPE: &[&str] = &[
    "Federal or national ministry or agency",
    "Sub-national ministry or agency",
    "Government-delegated management",
    "Transboundary governance",
    "Collaborative governance",
    "Joint governance",
    "Individual landowners",
    "Non-profit organisations",
    "For-profit organisations",
    "Indigenous peoples",
    "Local communities",
    "Not Reported",
];

pub const OWN_TYPE: &[&str] = &[
    "State",
    "Communal",
    "Individual landowners",
    "For-profit organisations",
    "Non-profit organisations",
    "Joint ownership",
    "Multiple ownership",
    "Contested",
    "Not Reported",
];

pub const VERIF: &[&str] = &["State Verified", "Expert Verified", "Not Reported"];
