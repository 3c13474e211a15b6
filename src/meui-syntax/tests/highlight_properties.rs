//! Behavioural tests for the highlighter as a whole.
//!
//! Covers:
//! - Lossless partition of every line
//! - Line count and numbering
//! - Rule interplay on realistic JSX lines

use meui_syntax::{highlight, split_lines, tokenize_line, LineRecord, TokenKind};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "import React, { useRef, useState } from \"react\";",
    "  const [activeTab, setActiveTab] = useState(\"stays\");",
    "    gsap.fromTo(`.field-${field}`,",
    "      { scale: 0.95, opacity: 0.8 },",
    "  <button onClick={handleSearch} className=\"search-btn\">",
    "    <img src={item.image} alt=\"\" loading=\"lazy\" />",
    "  </button>",
    "x = 1; // trailing comment",
    "  // leading comment with \"quotes\" and <Tags />",
    "const s = 'it\\'s';",
    "const unterminated = \"oops",
    "if (day < dates.start) {",
    "🏝️ Tropical paradise — café",
    "\t\treturn () => document.removeEventListener(\"mousedown\", handleClickOutside);",
];

fn kinds_and_values(line: &str) -> Vec<(TokenKind, String)> {
    tokenize_line(line)
        .into_iter()
        .filter(|t| !t.value.trim().is_empty())
        .map(|t| (t.kind, t.value))
        .collect()
}

mod partition {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_sample_is_lossless() {
        for line in SAMPLES {
            let rebuilt: String = tokenize_line(line).into_iter().map(|t| t.value).collect();
            assert_eq!(&rebuilt, line);
        }
    }

    #[test]
    fn test_no_empty_tokens() {
        for line in SAMPLES {
            assert!(tokenize_line(line).iter().all(|t| !t.is_empty()), "{line:?}");
        }
    }

    #[test]
    fn test_tokenizing_twice_is_identical() {
        for line in SAMPLES {
            assert_eq!(tokenize_line(line), tokenize_line(line));
        }
    }
}

mod lines {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_count_is_newlines_plus_one() {
        let sources = ["", "\n", "a\nb", "a\n\n\nb\n", &SAMPLES.join("\n")];
        for source in sources {
            let newlines = source.matches('\n').count();
            assert_eq!(split_lines(source).count(), newlines + 1);

            let records = highlight(source);
            assert_eq!(records.len(), newlines + 1);
            let numbers: Vec<usize> = records.iter().map(|r| r.line_number).collect();
            assert_eq!(numbers, (1..=newlines + 1).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_source_round_trip() {
        let source = SAMPLES.join("\n");
        let rebuilt: Vec<String> = highlight(&source).iter().map(LineRecord::text).collect();
        assert_eq!(rebuilt.join("\n"), source);
    }

    #[test]
    fn test_highlight_is_per_line_tokenization() {
        let source = SAMPLES.join("\n");
        for (record, line) in highlight(&source).iter().zip(SAMPLES) {
            assert_eq!(record.tokens, tokenize_line(line));
        }
    }
}

mod classification {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_operator_number_punctuation_together() {
        let line = "const tl = gsap.timeline({ onComplete: () => setCount(0) });";
        let p = |v: &str| (TokenKind::Plain, v.to_string());
        let punct = |v: &str| (TokenKind::Punctuation, v.to_string());
        assert_eq!(
            kinds_and_values(line),
            vec![
                (TokenKind::Keyword, "const".to_string()),
                p("tl"),
                punct("="),
                p("gsap"),
                p("."),
                p("timeline"),
                punct("("),
                punct("{"),
                p("onComplete"),
                p(":"),
                punct("("),
                punct(")"),
                (TokenKind::Operator, "=>".to_string()),
                p("setCount"),
                punct("("),
                (TokenKind::Number, "0".to_string()),
                punct(")"),
                punct("}"),
                punct(")"),
                punct(";"),
            ]
        );
    }

    #[test]
    fn test_returned_is_not_a_keyword() {
        let tokens = tokenize_line("returned");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Plain);
        assert_eq!(tokens[0].value, "returned");
    }

    #[test]
    fn test_comment_shortcut() {
        let line = "  // todo: fix this <Foo bar=\"1\" />";
        let tokens = tokenize_line(line);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].value, line);
    }

    #[test]
    fn test_escaped_quote() {
        let tokens = tokenize_line("const s = \"a\\\"b\";");
        let strings: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::String)
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(strings, vec!["\"a\\\"b\""]);
    }

    #[test]
    fn test_escaped_single_quote() {
        let kinds = kinds_and_values("const s = 'it\\'s';");
        assert!(kinds.contains(&(TokenKind::String, "'it\\'s'".to_string())));
    }

    #[test]
    fn test_attribute_only_from_allow_list() {
        let with = tokenize_line("<div className=\"x\">");
        assert!(
            with.iter()
                .any(|t| t.kind == TokenKind::Attribute && t.value == "className")
        );

        let without = tokenize_line("<div foobar=\"x\">");
        assert!(without.iter().all(|t| t.kind != TokenKind::Attribute));
    }

    #[test]
    fn test_jsx_element_line() {
        assert_eq!(
            kinds_and_values("<img src={item.image} alt=\"\" loading=\"lazy\" />"),
            vec![
                (TokenKind::Tag, "<img".to_string()),
                (TokenKind::Attribute, "src".to_string()),
                (TokenKind::Punctuation, "=".to_string()),
                (TokenKind::Punctuation, "{".to_string()),
                (TokenKind::Plain, "item".to_string()),
                (TokenKind::Plain, ".".to_string()),
                (TokenKind::Plain, "image".to_string()),
                (TokenKind::Punctuation, "}".to_string()),
                (TokenKind::Attribute, "alt".to_string()),
                (TokenKind::Punctuation, "=".to_string()),
                (TokenKind::String, "\"\"".to_string()),
                (TokenKind::Attribute, "loading".to_string()),
                (TokenKind::Punctuation, "=".to_string()),
                (TokenKind::String, "\"lazy\"".to_string()),
                (TokenKind::Tag, "/>".to_string()),
            ]
        );
    }

    #[test]
    fn test_closing_tag_is_one_token() {
        assert_eq!(
            kinds_and_values("  </button>"),
            vec![(TokenKind::Tag, "</button>".to_string())]
        );
    }

    #[test]
    fn test_comparison_degrades_gracefully() {
        // `<` followed by a space is not a tag opener.
        let kinds = kinds_and_values("if (day < dates.start) {");
        assert_eq!(kinds[0], (TokenKind::Keyword, "if".to_string()));
        assert!(kinds.contains(&(TokenKind::Plain, "<".to_string())));
    }
}
