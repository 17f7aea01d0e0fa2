use reflow_core::chunk::chunks;
use reflow_core::repr::text_norm::{normalize_newlines, strip_newlines};
use reflow_core::{count, format};

const SAMPLES: &[&str] = &[
    "",
    "a",
    "abcdef",
    "😊ab",
    "a\r\nbb",
    "one\rtwo\nthree\r\nfour\u{2028}five\u{2029}six",
    "\n\n\r\n",
    "例）東京都千代田区丸の内1-1-1\n電話: 03-1234-5678\n; ; 1 ; ;😊",
    "trailing\r\n",
    "e\u{301}\u{1F468}\u{200D}\u{1F469}",
];

#[test]
fn no_code_point_added_dropped_or_reordered() {
    for s in SAMPLES {
        for n in 1..=7 {
            let out = format(s, n);
            assert_eq!(strip_newlines(&out), strip_newlines(s), "text={s:?} n={n}");
            assert_eq!(count(&out), count(s));
        }
    }
}

#[test]
fn each_line_splits_into_ceil_len_over_n_segments() {
    for s in SAMPLES {
        let norm = normalize_newlines(s);
        for n in 1..=7 {
            for line in norm.split('\n') {
                let len = line.chars().count();
                let segs: Vec<&str> = chunks(line, n).collect();
                assert_eq!(segs.len(), len.div_ceil(n), "line={line:?} n={n}");
                for (i, seg) in segs.iter().enumerate() {
                    let k = seg.chars().count();
                    if i + 1 < segs.len() {
                        assert_eq!(k, n);
                    } else {
                        let want = if len % n == 0 { n } else { len % n };
                        assert_eq!(k, want);
                    }
                }
            }
        }
    }
}

#[test]
fn output_line_count_matches_chunks_per_logical_line() {
    for s in SAMPLES {
        let norm = normalize_newlines(s);
        for n in 1..=7 {
            let out = format(s, n);
            let want: usize = norm
                .split('\n')
                .map(|line| line.chars().count().div_ceil(n).max(1))
                .sum();
            let lines: Vec<&str> = out.split('\n').collect();
            assert_eq!(lines.len(), want, "text={s:?} n={n}");
            assert!(lines.iter().all(|l| l.chars().count() <= n));
        }
    }
}

#[test]
fn each_logical_line_is_its_chunks_joined() {
    for s in SAMPLES {
        let norm = normalize_newlines(s);
        for n in 1..=7 {
            for line in norm.split('\n') {
                let segs: Vec<&str> = chunks(line, n).collect();
                assert_eq!(format(line, n), segs.join("\n"), "line={line:?} n={n}");
                if !line.is_empty() {
                    // no empty segment: no doubled or trailing synthetic break
                    assert!(segs.iter().all(|seg| !seg.is_empty()), "line={line:?} n={n}");
                }
            }
        }
    }
}

#[test]
fn no_trailing_break_on_exact_multiple() {
    assert_eq!(format("abcdefg", 3), "abc\ndef\ng");
    for n in 1..5 {
        let out = format("abcdefg\u{2029}hi", n);
        let lines: Vec<&str> = out.split('\n').collect();
        assert!(lines.iter().all(|l| !l.is_empty()), "n={n} out={out:?}");
    }
}

#[test]
fn output_is_already_normalized() {
    for s in SAMPLES {
        for n in 0..=5 {
            let out = format(s, n);
            assert_eq!(normalize_newlines(&out), out);
        }
    }
}
