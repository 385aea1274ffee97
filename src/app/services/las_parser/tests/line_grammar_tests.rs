//! Tests for header line splitting

use super::super::line_grammar::{
    ParamGrammar, WellDialect, apply_well_dialect, normalize_line, parse_curve_line,
    parse_param_line,
};
use crate::app::models::HeaderParam;

#[test]
fn test_normalize_line() {
    let cases = [
        ("STEP.M            10 : dept step", "STEP.M 10:dept step"),
        ("STEP . M          10 : dept step", "STEP.M 10:dept step"),
        ("\t STEP   M       10 :dept step ", "STEP M 10:dept step"),
        ("ШАГ :m     0.2  :шаг по глубине ", "ШАГ:m 0.2:шаг по глубине"),
        ("шаг.     : 2 сам             ", "шаг.:2 сам"),
        ("NULL.   -999.250   :NULL VALUE", "NULL.-999.250:NULL VALUE"),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize_line(input), expected, "input {:?}", input);
    }
}

#[test]
fn test_parse_param_line_fields() {
    // (line, name, unit, value, description)
    let cases = [
        ("STEP.M            10 : dept step", "STEP", "M", "10", "dept step"),
        ("STEP.M            10            ", "STEP", "M", "10", ""),
        ("STEP .M           10 : dept step", "STEP", "M", "10", "dept step"),
        ("STEP M          10.0 : dept step", "STEP", "M", "10.0", "dept step"),
        ("ST/M              10 : dept step", "ST/M", "", "10", "dept step"),
        ("STEP              10 : dept step", "STEP", "", "10", "dept step"),
        ("ШАГ.M         0.0  :шаг глубины ", "ШАГ", "M", "0.0", "шаг глубины"),
        ("ШАГ. M          :шаг по глубине ", "ШАГ", "", "M", "шаг по глубине"),
        ("ШАГ  M                          ", "ШАГ", "", "M", ""),
        ("ШАГ  M          11              ", "ШАГ", "M", "11", ""),
        ("ШАГ             :шаг по глубине ", "ШАГ", "", "", "шаг по глубине"),
        ("ШАГ :m     0.2  :шаг по глубине ", "ШАГ", "m", "0.2", "шаг по глубине"),
        ("шаг.     : 2 сам                ", "шаг", "", "", "2 сам"),
        ("STEP .m\t\t 10.0 \t: 2 сам      ", "STEP", "m", "10.0", "2 сам"),
        ("VERS.             1.20: cp_866  ", "VERS", "", "1.20", "cp_866"),
        ("NULL.   -999.250     :NULL VALUE", "NULL", "", "-999.250", "NULL VALUE"),
    ];
    for (line, name, unit, value, description) in cases {
        let parsed = parse_param_line(line);
        assert_eq!(parsed.param.name, name, "name of {:?}", line);
        assert_eq!(parsed.param.unit, unit, "unit of {:?}", line);
        assert_eq!(parsed.param.value, value, "value of {:?}", line);
        assert_eq!(parsed.param.description, description, "description of {:?}", line);
        assert!(parsed.issue.is_none());
    }
}

#[test]
fn test_parse_param_line_numeric_step_values() {
    let cases = [
        ("STEP.M\t0.10                      ", 0.1),
        (" STEP   . M       10.0 : dept step", 10.0),
        ("STEP \t  M  \t\t 10 :  dept step  ", 10.0),
        ("STEP           0.113:    dept step", 0.113),
        ("STEP.\t0.999       : dept  \t step", 0.999),
    ];
    for (line, expected) in cases {
        let parsed = parse_param_line(line);
        assert_eq!(parsed.param.value_f64(), Some(expected), "line {:?}", line);
    }
}

#[test]
fn test_parse_param_line_without_name() {
    let parsed = parse_param_line(".M 10 : no name");
    assert_eq!(parsed.param.name, "");
    assert!(parsed.issue.is_some());
}

#[test]
fn test_parse_curve_line_fields() {
    // (line, name, unit, description)
    let cases = [
        (" ПС   мВ.", "ПС мВ", "", ""),
        ("ПС.мВ          : 1 кр сам", "ПС", "мВ", "1 кр сам"),
        ("ПС.           : 2 кр сам ", "ПС", "", "2 кр сам"),
        ("ПС повторная  :3  кр  сам", "ПС повторная", "", "3 кр сам"),
        (" ПС  \t  \t    : 4 кр сам", "ПС", "", "4 кр сам"),
        (" ПС            :         ", "ПС", "", ""),
        (" ПС . мВ       : 6 кр сам", "ПС", "мВ", "6 кр сам"),
        (" пс повт . мВ  : 7 кр сам", "пс повт", "мВ", "7 кр сам"),
        (" ПС \t  мВ     : 8 кр сам", "ПС мВ", "", "8 кр сам"),
        (" ПС   . мВ               ", "ПС", "мВ", ""),
        (" ПС   повт               ", "ПС повт", "", ""),
    ];
    for (line, name, unit, description) in cases {
        let parsed = parse_curve_line(line);
        assert_eq!(parsed.param.name, name, "name of {:?}", line);
        assert_eq!(parsed.param.unit, unit, "unit of {:?}", line);
        assert_eq!(parsed.param.description, description, "description of {:?}", line);
        assert!(parsed.param.value.is_empty());
    }
}

#[test]
fn test_parse_curve_line_empty_name() {
    let parsed = parse_curve_line(".MV : nameless");
    assert_eq!(parsed.param.name, "-EL-");
    assert_eq!(parsed.param.unit, "MV");
    assert!(parsed.issue.is_some());
}

#[test]
fn test_well_dialect_for_version() {
    assert_eq!(WellDialect::for_version(1.2), WellDialect::PreV2);
    assert_eq!(WellDialect::for_version(2.0), WellDialect::V2Plus);
    assert_eq!(WellDialect::for_version(3.0), WellDialect::V2Plus);
}

#[test]
fn test_well_pre_v2_takes_description() {
    let grammar = ParamGrammar::Well(WellDialect::PreV2);
    let parsed = grammar.parse("WELL. WELL : 1 BOREHOLE", 7);
    assert_eq!(parsed.param.name, "WELL");
    assert_eq!(parsed.param.value, "1 BOREHOLE");
    assert_eq!(parsed.param.description, "WELL");
    assert_eq!(parsed.param.line, Some(7));
}

#[test]
fn test_well_v2_rejoins_split_value() {
    let grammar = ParamGrammar::Well(WellDialect::V2Plus);
    let parsed = grammar.parse("WELL.    Well 12   : well name", 3);
    assert_eq!(parsed.param.value, "Well 12");
    assert!(parsed.param.unit.is_empty());

    let parsed = grammar.parse("WELL.    12   : well name", 3);
    assert_eq!(parsed.param.value, "12");
}

#[test]
fn test_well_dialect_only_touches_well() {
    let grammar = ParamGrammar::Well(WellDialect::PreV2);
    let parsed = grammar.parse("STEP.M 0.1 : step", 1);
    assert_eq!(parsed.param.unit, "M");
    assert_eq!(parsed.param.value, "0.1");
}

#[test]
fn test_apply_well_dialect_pre_v2_with_unit() {
    let mut param = HeaderParam::new("WELL", "A", "B", "NAME");
    apply_well_dialect(&mut param, WellDialect::PreV2);
    assert_eq!(param.value, "NAME");
    assert_eq!(param.description, "A B");
    assert!(param.unit.is_empty());
}
