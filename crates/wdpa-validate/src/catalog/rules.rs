use wdpa_model::Field;

use super::values::{
    DESIG_ENG_INTERNATIONAL, DESIG_ENG_REGIONAL, DESIG_TYPE, DESIG_TYPE_INTERNATIONAL,
    DESIG_TYPE_REGIONAL, GOV_TYPE, IUCN_CAT, MARINE, MARINE_COASTAL_OR_MARINE,
    MARINE_TERRESTRIAL, NO_TAKE_MARINE, NOT_APPLICABLE, OWN_TYPE, PA_DEF, RAMSAR_WHS_DESIG_ENG,
    STATUS, STATUS_ESTABLISHED, UNESCO_WHS_DESIG_ENG, VERIF, ZERO_AREA,
};
use super::AllowedValues::{self, Fixed};
use super::{
    Applicability, Bespoke, CheckKind, ConditionSpec, IdentifierKind, RuleDef,
    Verdict,
};

const fn rule(
    name: &'static str,
    description: &'static str,
    applies_to: Applicability,
    verdict: Verdict,
    kind: CheckKind,
) -> RuleDef {
    RuleDef {
        name,
        description,
        applies_to,
        verdict,
        identifier: IdentifierKind::RecordId,
        kind,
    }
}

const fn bespoke(name: &'static str, description: &'static str, check: Bespoke) -> RuleDef {
    rule(name, description, Applicability::Both, Verdict::Fail, CheckKind::Bespoke(check))
}

const fn size_order(
    name: &'static str,
    description: &'static str,
    applies_to: Applicability,
    smaller: Field,
    larger: Field,
) -> RuleDef {
    rule(
        name,
        description,
        applies_to,
        Verdict::Fail,
        CheckKind::SizeOrder { smaller, larger },
    )
}

const fn consistent(name: &'static str, field: Field) -> RuleDef {
    rule(
        name,
        "records sharing a WDPAID disagree on this field",
        Applicability::Both,
        Verdict::Fail,
        CheckKind::GroupConsistency { field },
    )
}

const fn valid(
    name: &'static str,
    description: &'static str,
    field: Field,
    allowed: AllowedValues,
) -> RuleDef {
    rule(
        name,
        description,
        Applicability::Both,
        Verdict::Fail,
        CheckKind::Membership {
            field,
            allowed,
            condition: None,
        },
    )
}

const fn valid_when(
    name: &'static str,
    description: &'static str,
    field: Field,
    allowed: AllowedValues,
    condition_field: Field,
    condition_values: AllowedValues,
) -> RuleDef {
    rule(
        name,
        description,
        Applicability::Both,
        Verdict::Fail,
        CheckKind::Membership {
            field,
            allowed,
            condition: Some(ConditionSpec {
                field: condition_field,
                values: condition_values,
            }),
        },
    )
}

const fn forbidden(name: &'static str, field: Field) -> RuleDef {
    rule(
        name,
        "free text contains one of < > ? * # or a line break",
        Applicability::Both,
        Verdict::Fail,
        CheckKind::ForbiddenCharacters { field },
    )
}

const fn outlier(
    name: &'static str,
    description: &'static str,
    field_a: Field,
    field_b: Field,
) -> RuleDef {
    rule(
        name,
        description,
        Applicability::Polygon,
        Verdict::Check,
        CheckKind::OutlierRatio { field_a, field_b },
    )
}

/// The full catalog: core rules (points and polygons) followed by the
/// polygon-only area rules.
pub const RULES: &[RuleDef] = &[
    // --- core ---
    bespoke(
        "duplicate_wdpa_pid",
        "WDPA_PID occurs more than once",
        Bespoke::DuplicateRecordId,
    ),
    bespoke(
        "area_invalid_rep_m_area_marine12",
        "REP_M_AREA <= 0 while MARINE is 1 or 2",
        Bespoke::MarineAreaPositive(Field::RepMArea),
    ),
    size_order(
        "area_invalid_rep_m_area_rep_area",
        "REP_M_AREA is larger than REP_AREA",
        Applicability::Both,
        Field::RepMArea,
        Field::RepArea,
    ),
    size_order(
        "area_invalid_no_tk_area_rep_m_area",
        "NO_TK_AREA is larger than REP_M_AREA",
        Applicability::Both,
        Field::NoTkArea,
        Field::RepMArea,
    ),
    bespoke(
        "invalid_no_take_no_tk_area_rep_m_area",
        "NO_TAKE is 'All' while NO_TK_AREA differs from REP_M_AREA",
        Bespoke::NoTakeAreaEquality,
    ),
    bespoke(
        "invalid_int_crit_desig_eng_other",
        "INT_CRIT is not 'Not Applicable' for a non-Ramsar, non-WHS designation",
        Bespoke::IntCritApplicability,
    ),
    bespoke(
        "invalid_desig_eng_iucn_cat_other",
        "IUCN_CAT is invalid for a non-UNESCO-MAB, non-WHS designation",
        Bespoke::IucnApplicability,
    ),
    consistent("inconsistent_name_same_wdpaid", Field::Name),
    consistent("inconsistent_orig_name_same_wdpaid", Field::OrigName),
    consistent("inconsistent_desig_same_wdpaid", Field::Desig),
    consistent("inconsistent_desig_eng_same_wdpaid", Field::DesigEng),
    consistent("inconsistent_desig_type_same_wdpaid", Field::DesigType),
    consistent("inconsistent_iucn_cat_same_wdpaid", Field::IucnCat),
    consistent("inconsistent_int_crit_same_wdpaid", Field::IntCrit),
    consistent("inconsistent_no_take_same_wdpaid", Field::NoTake),
    consistent("inconsistent_status_same_wdpaid", Field::Status),
    consistent("inconsistent_status_yr_same_wdpaid", Field::StatusYr),
    consistent("inconsistent_gov_type_same_wdpaid", Field::GovType),
    consistent("inconsistent_own_type_same_wdpaid", Field::OwnType),
    consistent("inconsistent_mang_auth_same_wdpaid", Field::MangAuth),
    consistent("inconsistent_mang_plan_same_wdpaid", Field::MangPlan),
    consistent("inconsistent_verif_same_wdpaid", Field::Verif),
    consistent("inconsistent_metadataid_same_wdpaid", Field::MetadataId),
    consistent("inconsistent_sub_loc_same_wdpaid", Field::SubLoc),
    consistent("inconsistent_parent_iso3_same_wdpaid", Field::ParentIso3),
    consistent("inconsistent_iso3_same_wdpaid", Field::Iso3),
    valid(
        "invalid_pa_def",
        "PA_DEF is not '1'",
        Field::PaDef,
        Fixed(PA_DEF),
    ),
    valid_when(
        "invalid_desig_eng_international",
        "DESIG_TYPE is 'International' but DESIG_ENG is not an international designation",
        Field::DesigEng,
        Fixed(DESIG_ENG_INTERNATIONAL),
        Field::DesigType,
        Fixed(DESIG_TYPE_INTERNATIONAL),
    ),
    valid_when(
        "invalid_desig_type_international",
        "DESIG_ENG is an international designation but DESIG_TYPE is not 'International'",
        Field::DesigType,
        Fixed(DESIG_TYPE_INTERNATIONAL),
        Field::DesigEng,
        Fixed(DESIG_ENG_INTERNATIONAL),
    ),
    valid_when(
        "invalid_desig_eng_regional",
        "DESIG_TYPE is 'Regional' but DESIG_ENG is not a regional designation",
        Field::DesigEng,
        Fixed(DESIG_ENG_REGIONAL),
        Field::DesigType,
        Fixed(DESIG_TYPE_REGIONAL),
    ),
    valid_when(
        "invalid_desig_type_regional",
        "DESIG_ENG is a regional designation but DESIG_TYPE is not 'Regional'",
        Field::DesigType,
        Fixed(DESIG_TYPE_REGIONAL),
        Field::DesigEng,
        Fixed(DESIG_ENG_REGIONAL),
    ),
    valid_when(
        "invalid_int_crit_desig_eng_ramsar_whs",
        "INT_CRIT is not a valid criteria combination for a Ramsar or WHS site",
        Field::IntCrit,
        AllowedValues::InternationalCriteria,
        Field::DesigEng,
        Fixed(RAMSAR_WHS_DESIG_ENG),
    ),
    valid(
        "invalid_desig_type",
        "DESIG_TYPE is not a known designation type",
        Field::DesigType,
        Fixed(DESIG_TYPE),
    ),
    valid(
        "invalid_iucn_cat",
        "IUCN_CAT is not a known category",
        Field::IucnCat,
        Fixed(IUCN_CAT),
    ),
    valid_when(
        "invalid_iucn_cat_unesco_whs",
        "IUCN_CAT is not 'Not Applicable' for a UNESCO-MAB or WHS site",
        Field::IucnCat,
        Fixed(NOT_APPLICABLE),
        Field::DesigEng,
        Fixed(UNESCO_WHS_DESIG_ENG),
    ),
    valid(
        "invalid_marine",
        "MARINE is not 0, 1 or 2",
        Field::Marine,
        Fixed(MARINE),
    ),
    valid_when(
        "invalid_no_take_marine0",
        "NO_TAKE is not 'Not Applicable' for a terrestrial area",
        Field::NoTake,
        Fixed(NOT_APPLICABLE),
        Field::Marine,
        Fixed(MARINE_TERRESTRIAL),
    ),
    valid_when(
        "invalid_no_take_marine12",
        "NO_TAKE is not a valid value for a coastal or marine area",
        Field::NoTake,
        Fixed(NO_TAKE_MARINE),
        Field::Marine,
        Fixed(MARINE_COASTAL_OR_MARINE),
    ),
    valid_when(
        "invalid_no_tk_area_marine",
        "NO_TK_AREA is not 0 for a terrestrial area",
        Field::NoTkArea,
        AllowedValues::Numbers(ZERO_AREA),
        Field::Marine,
        Fixed(MARINE_TERRESTRIAL),
    ),
    valid_when(
        "invalid_no_tk_area_no_take",
        "NO_TK_AREA is not 0 while NO_TAKE is 'Not Applicable'",
        Field::NoTkArea,
        AllowedValues::Numbers(ZERO_AREA),
        Field::NoTake,
        Fixed(NOT_APPLICABLE),
    ),
    valid(
        "invalid_status",
        "STATUS is not a known status",
        Field::Status,
        Fixed(STATUS),
    ),
    valid(
        "invalid_status_yr",
        "STATUS_YR is neither 0 nor a year between the first status year and now",
        Field::StatusYr,
        AllowedValues::StatusYears,
    ),
    valid(
        "invalid_gov_type",
        "GOV_TYPE is not a known governance type",
        Field::GovType,
        Fixed(GOV_TYPE),
    ),
    valid(
        "invalid_own_type",
        "OWN_TYPE is not a known ownership type",
        Field::OwnType,
        Fixed(OWN_TYPE),
    ),
    valid(
        "invalid_verif",
        "VERIF is not a known verification status",
        Field::Verif,
        Fixed(VERIF),
    ),
    valid(
        "invalid_parent_iso3",
        "PARENT_ISO3 is not an ISO 3166 alpha-3 code",
        Field::ParentIso3,
        AllowedValues::CountryCodes,
    ),
    valid(
        "invalid_iso3",
        "ISO3 is not an ISO 3166 alpha-3 code",
        Field::Iso3,
        AllowedValues::CountryCodes,
    ),
    valid_when(
        "invalid_status_desig_type",
        "STATUS is not 'Established' while DESIG_TYPE is 'Not Applicable'",
        Field::Status,
        Fixed(STATUS_ESTABLISHED),
        Field::DesigType,
        Fixed(NOT_APPLICABLE),
    ),
    forbidden("forbidden_character_name", Field::Name),
    forbidden("forbidden_character_orig_name", Field::OrigName),
    forbidden("forbidden_character_desig", Field::Desig),
    forbidden("forbidden_character_desig_eng", Field::DesigEng),
    forbidden("forbidden_character_mang_auth", Field::MangAuth),
    forbidden("forbidden_character_mang_plan", Field::MangPlan),
    forbidden("forbidden_character_sub_loc", Field::SubLoc),
    rule(
        "invalid_nan",
        "a required field is empty",
        Applicability::Both,
        Verdict::Check,
        CheckKind::Bespoke(Bespoke::MissingValues),
    ),
    // --- area (polygons only) ---
    outlier(
        "area_invalid_too_large_gis",
        "GIS_AREA is much larger than REP_AREA",
        Field::GisArea,
        Field::RepArea,
    ),
    outlier(
        "area_invalid_too_large_rep",
        "REP_AREA is much larger than GIS_AREA",
        Field::RepArea,
        Field::GisArea,
    ),
    outlier(
        "area_invalid_too_large_gis_m",
        "GIS_M_AREA is much larger than REP_M_AREA",
        Field::GisMArea,
        Field::RepMArea,
    ),
    outlier(
        "area_invalid_too_large_rep_m",
        "REP_M_AREA is much larger than GIS_M_AREA",
        Field::RepMArea,
        Field::GisMArea,
    ),
    rule(
        "area_invalid_gis_area",
        "GIS_AREA is at or below the minimum area",
        Applicability::Polygon,
        Verdict::Check,
        CheckKind::Bespoke(Bespoke::SmallGisArea),
    ),
    size_order(
        "area_invalid_no_tk_area_gis_m_area",
        "NO_TK_AREA is larger than GIS_M_AREA",
        Applicability::Polygon,
        Field::NoTkArea,
        Field::GisMArea,
    ),
    size_order(
        "area_invalid_gis_m_area_gis_area",
        "GIS_M_AREA is larger than GIS_AREA",
        Applicability::Polygon,
        Field::GisMArea,
        Field::GisArea,
    ),
    rule(
        "area_invalid_marine",
        "MARINE disagrees with the marine share of the GIS area",
        Applicability::Polygon,
        Verdict::Check,
        CheckKind::Bespoke(Bespoke::MarineByGeometry),
    ),
    rule(
        "area_invalid_gis_m_area_marine12",
        "GIS_M_AREA <= 0 while MARINE is 1 or 2",
        Applicability::Polygon,
        Verdict::Fail,
        CheckKind::Bespoke(Bespoke::MarineAreaPositive(Field::GisMArea)),
    ),
];
