use copywriter_core::{normalize_escaped_newlines, to_markdown};
use pretty_assertions::assert_eq;

#[test]
fn empty_input_yields_empty_markdown() {
    assert_eq!(to_markdown(""), "");
}

#[test]
fn escaped_newlines_become_line_breaks() {
    assert_eq!(normalize_escaped_newlines("a\\nb\\n\\nc"), "a\nb\n\nc");
    assert_eq!(normalize_escaped_newlines("no escapes"), "no escapes");
}

#[test]
fn letter_gets_heading_and_signed_off_divider() {
    let raw = "Vážený zákazník,\\nText.\\n\\nS úctou,\\nTeam";
    let md = to_markdown(raw);

    assert_eq!(
        md,
        "### Vážený zákazník,\nText.\n\n\n---\n\n*S úctou,*\nTeam"
    );
    let lines: Vec<&str> = md.lines().collect();
    assert_eq!(lines[0], "### Vážený zákazník,");
    assert_eq!(lines[1], "Text.");
}

#[test]
fn all_greetings_become_headings() {
    let md = to_markdown("Dobrý deň:\nAhoj\nMilý Peter,");
    assert_eq!(md, "### Dobrý deň:\nAhoj\n### Milý Peter,");
}

#[test]
fn all_sign_offs_get_divider_and_italics() {
    for sign_off in ["S úctou", "S pozdravom,", "Srdečne Jana", "S vďakou,"] {
        let md = to_markdown(&format!("Text\n{sign_off}"));
        assert_eq!(md, format!("Text\n\n---\n\n*{sign_off}*"));
    }
}

#[test]
fn team_signatures_are_bold() {
    assert_eq!(to_markdown("Váš tím Copy"), "**Váš tím Copy**");
    assert_eq!(to_markdown("Tím podpory"), "**Tím podpory**");
    assert_eq!(to_markdown("Tímový duch"), "Tímový duch");
}

#[test]
fn callout_label_moves_to_its_own_bold_line() {
    assert_eq!(
        to_markdown("DÔLEŽITÉ: something"),
        "\n**🔔 DÔLEŽITÉ:** something"
    );
    assert_eq!(
        to_markdown("Text POZNÁMKA: viď nižšie"),
        "Text \n**🔔 POZNÁMKA:** viď nižšie"
    );
}

#[test]
fn callout_labels_need_whole_word_and_colon() {
    assert_eq!(to_markdown("TIPY: tri"), "TIPY: tri");
    assert_eq!(to_markdown("ATIP: nie"), "ATIP: nie");
    assert_eq!(to_markdown("AKCIA bez dvojbodky"), "AKCIA bez dvojbodky");
}

#[test]
fn thanks_lines_are_italic() {
    assert_eq!(
        to_markdown("Ďakujeme za dôveru."),
        "*Ďakujeme za dôveru.*"
    );
}

#[test]
fn bullet_glyphs_become_dash_bullets() {
    assert_eq!(to_markdown("• item one\n• item two"), "- item one\n- item two");
    assert_eq!(to_markdown("·\titem"), "- item");
    assert_eq!(to_markdown("a • not at start"), "a • not at start");
}

#[test]
fn numbered_markers_get_single_space() {
    assert_eq!(to_markdown("1.\tfirst\n2. second"), "1. first\n2. second");
    assert_eq!(to_markdown("3.x"), "3.x");
}

#[test]
fn paragraph_breaks_are_preserved() {
    assert_eq!(to_markdown("one\n\ntwo\n\n\nthree"), "one\n\ntwo\n\n\nthree");
}

#[test]
fn crlf_line_endings_stay_outside_the_markers() {
    assert_eq!(
        to_markdown("Text\r\nS úctou,\r\nĎakujeme.\r\nTeam"),
        "Text\r\n\n---\n\n*S úctou,*\r\n*Ďakujeme.*\r\nTeam"
    );
    assert_eq!(
        to_markdown("Vážený pán,\r\nTím podpory\r\n"),
        "### Vážený pán,\r\n**Tím podpory**\r\n"
    );
}

#[test]
fn later_rules_see_text_inserted_by_earlier_ones() {
    // The team rule wraps the line first, then the callout rule splits it.
    assert_eq!(
        to_markdown("Tím TIP: rýchlo"),
        "**Tím \n**🔔 TIP:** rýchlo**"
    );
    assert_eq!(
        to_markdown("S pozdravom\n· Jana"),
        "\n---\n\n*S pozdravom*\n- Jana"
    );
}

#[test]
fn double_application_is_not_idempotent() {
    let once = to_markdown("POZNÁMKA: x");
    let twice = to_markdown(&once);
    assert_eq!(once, "\n**🔔 POZNÁMKA:** x");
    assert_ne!(twice, once);
    assert!(twice.contains("🔔 \n**🔔 POZNÁMKA:**"));
}
