use unicode_syllabic_bakery::error::BakeError;
use unicode_syllabic_bakery::source::{parse_range_table, AxisLayout, HeaderRule, TokenRule};

const SAMPLE: &str = "\
# Sample-1.0.0.txt
# Date: 2026-01-01

# ================================================

0900..0902    ; Bindu # Mn [3]
093D          ; Avagraha

0915          ; Consonant ; лишнее поле игнорируется
";

#[test]
fn test_standard_layout()
{
    let table = parse_range_table("Sample", SAMPLE, &AxisLayout::standard()).unwrap();

    assert_eq!(table.axis, "Sample");
    assert_eq!(table.header, vec!["# Sample-1.0.0.txt", "# Date: 2026-01-01"]);

    assert_eq!(table.ranges.len(), 3);
    assert_eq!(table.ranges[0].start, 0x0900);
    assert_eq!(table.ranges[0].end, 0x0902);
    assert_eq!(table.ranges[0].token, "Bindu");
    assert_eq!(table.ranges[0].line, 6);
    assert_eq!(table.ranges[1].start, 0x093D);
    assert_eq!(table.ranges[1].end, 0x093D);
    assert_eq!(table.ranges[2].token, "Consonant");
    assert_eq!(table.ranges[2].line, 9);

    assert_eq!(table.counts["Bindu"], 3);
    assert_eq!(table.counts["Avagraha"], 1);
    assert_eq!(table.counts["Consonant"], 1);

    let codes: Vec<u32> = table.codepoints().collect();
    assert_eq!(codes, vec![0x0900, 0x0901, 0x0902, 0x093D, 0x0915]);
}

#[test]
fn test_count_default()
{
    let mut table = parse_range_table("Sample", SAMPLE, &AxisLayout::standard()).unwrap();

    table.count_default("Other");
    table.count_default("Other");

    assert_eq!(table.counts["Other"], 2);
    assert_eq!(table.counts["Bindu"], 3);
}

#[test]
fn test_no_header_third_field()
{
    // формат UnicodeData.txt: без шапки, категория в третьем поле
    let text = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;;
093C;DEVANAGARI SIGN NUKTA;Mn;7;NSM;;;;;N;;;;;
";
    let layout = AxisLayout {
        token_field: 2,
        header: HeaderRule::None,
        rule: TokenRule::AsIs,
    };

    let table = parse_range_table("UnicodeData", text, &layout).unwrap();

    assert!(table.header.is_empty());
    assert_eq!(table.ranges.len(), 2);
    assert_eq!(table.ranges[0].token, "Lu");
    assert_eq!(table.ranges[0].line, 1);
    assert_eq!(table.ranges[1].start, 0x093C);
    assert_eq!(table.ranges[1].token, "Mn");
}

#[test]
fn test_leading_block_header()
{
    let text = "\
# Extra.txt
# рукописные дополнения

0CF1          ; Consonant_With_Stacker
";
    let layout = AxisLayout {
        header: HeaderRule::LeadingBlock,
        ..AxisLayout::standard()
    };

    let table = parse_range_table("Extra", text, &layout).unwrap();

    assert_eq!(table.header, vec!["# Extra.txt", "# рукописные дополнения"]);
    assert_eq!(table.ranges.len(), 1);
    assert_eq!(table.ranges[0].start, 0x0CF1);
    assert_eq!(table.ranges[0].line, 4);
}

#[test]
fn test_leading_block_without_blank_line()
{
    // файл без пустой строки целиком уходит в шапку
    let text = "# только шапка\n# и ничего больше";

    let layout = AxisLayout {
        header: HeaderRule::LeadingBlock,
        ..AxisLayout::standard()
    };

    let table = parse_range_table("Extra", text, &layout).unwrap();

    assert_eq!(table.header.len(), 2);
    assert!(table.ranges.is_empty());
}

#[test]
fn test_keep_only()
{
    let text = "\
# DerivedCoreProperties
# выдержка

0041..005A    ; Alphabetic
034F          ; Default_Ignorable_Code_Point
200B..200F    ; Default_Ignorable_Code_Point # Cf [5]
00AA          ; Alphabetic
";
    let layout = AxisLayout {
        rule: TokenRule::KeepOnly("Default_Ignorable_Code_Point"),
        ..AxisLayout::standard()
    };

    let table = parse_range_table("DerivedCoreProperties", text, &layout).unwrap();

    assert_eq!(table.ranges.len(), 2);
    assert_eq!(table.ranges[0].start, 0x034F);
    assert_eq!(table.ranges[1].end, 0x200F);
    assert_eq!(table.counts.len(), 1);
    assert_eq!(table.counts["Default_Ignorable_Code_Point"], 6);
}

#[test]
fn test_rename()
{
    let text = "\
# шапка
# шапка

0CF1..0CF2    ; NA
11302         ; Top
";
    let layout = AxisLayout {
        rule: TokenRule::Rename(&[("NA", "Not_Applicable")]),
        ..AxisLayout::standard()
    };

    let table = parse_range_table("Extra", text, &layout).unwrap();

    assert_eq!(table.ranges[0].token, "Not_Applicable");
    assert_eq!(table.ranges[1].token, "Top");
    assert_eq!(table.counts["Not_Applicable"], 2);
}

#[test]
fn test_skips_junk_lines()
{
    let text = "\
# комментарий
0900 # строка из одного поля пропускается

0901          ; Bindu # а комментарий в хвосте отрезается
";
    let layout = AxisLayout {
        header: HeaderRule::None,
        ..AxisLayout::standard()
    };

    let table = parse_range_table("Sample", text, &layout).unwrap();

    assert_eq!(table.ranges.len(), 1);
    assert_eq!(table.ranges[0].start, 0x0901);
    assert_eq!(table.ranges[0].token, "Bindu");
}

#[test]
fn test_malformed_codepoint()
{
    let layout = AxisLayout {
        header: HeaderRule::None,
        ..AxisLayout::standard()
    };

    let err = parse_range_table("Sample", "XYZ ; Bindu\n", &layout).unwrap_err();

    assert!(matches!(err, BakeError::MalformedLine { axis: "Sample", line: 1, .. }));
}

#[test]
fn test_empty_token()
{
    let layout = AxisLayout {
        header: HeaderRule::None,
        ..AxisLayout::standard()
    };

    let err = parse_range_table("Sample", "0900 ;\n", &layout).unwrap_err();

    assert!(matches!(err, BakeError::MalformedLine { line: 1, .. }));
}

#[test]
fn test_codepoint_out_of_range()
{
    let layout = AxisLayout {
        header: HeaderRule::None,
        ..AxisLayout::standard()
    };

    let err = parse_range_table("Sample", "110000 ; Top\n", &layout).unwrap_err();

    assert!(matches!(err, BakeError::CodepointOutOfRange { value: 0x110000, .. }));
}

#[test]
fn test_inverted_range()
{
    let layout = AxisLayout {
        header: HeaderRule::None,
        ..AxisLayout::standard()
    };

    let err = parse_range_table("Sample", "0902..0900 ; Bindu\n", &layout).unwrap_err();

    assert!(matches!(
        err,
        BakeError::InvertedRange {
            start: 0x0902,
            end: 0x0900,
            ..
        }
    ));
}
