use std::collections::HashMap;

use once_cell::sync::Lazy;

const VIMHELP_BASE: &str = "https://vimhelp.org/";

// Well-known runtime tags and the help file that defines each of them.
// Destinations are derived as <base><file>.html#<tag>.
static BUILTIN_TAGS: &[(&str, &str)] = &[
    ("help", "helphelp.txt"),
    (":help", "helphelp.txt"),
    ("help.txt", "help.txt"),
    ("quickref", "quickref.txt"),
    ("index", "index.txt"),
    ("index.txt", "index.txt"),
    ("tutor", "usr_01.txt"),
    ("usr_01.txt", "usr_01.txt"),
    ("usr_toc.txt", "usr_toc.txt"),
    ("notation", "helphelp.txt"),
    ("key-notation", "intro.txt"),
    ("bars", "helphelp.txt"),
    ("CTRL-W", "index.txt"),
    ("CTRL-]", "tagsrch.txt"),
    ("CTRL-T", "tagsrch.txt"),
    ("i_CTRL-N", "insert.txt"),
    ("c_CTRL-R", "cmdline.txt"),
    ("v_CTRL-V", "visual.txt"),
    (":substitute", "change.txt"),
    (":s", "change.txt"),
    (":global", "repeat.txt"),
    (":g", "repeat.txt"),
    (":map", "map.txt"),
    (":nmap", "map.txt"),
    (":noremap", "map.txt"),
    ("<Leader>", "map.txt"),
    ("mapleader", "map.txt"),
    (":autocmd", "autocmd.txt"),
    ("autocmd-events", "autocmd.txt"),
    (":syntax", "syntax.txt"),
    (":highlight", "syntax.txt"),
    ("group-name", "syntax.txt"),
    (":set", "options.txt"),
    ("options", "options.txt"),
    ("'compatible'", "options.txt"),
    ("'expandtab'", "options.txt"),
    ("'hlsearch'", "options.txt"),
    ("'ignorecase'", "options.txt"),
    ("'incsearch'", "options.txt"),
    ("'number'", "options.txt"),
    ("'shiftwidth'", "options.txt"),
    ("'tabstop'", "options.txt"),
    ("'textwidth'", "options.txt"),
    ("'wrap'", "options.txt"),
    ("motion.txt", "motion.txt"),
    ("word", "motion.txt"),
    ("pattern", "pattern.txt"),
    ("regexp", "pattern.txt"),
    ("/\\v", "pattern.txt"),
    ("registers", "change.txt"),
    ("folding", "fold.txt"),
    ("windows.txt", "windows.txt"),
    ("tabpage", "tabpage.txt"),
    ("eval.txt", "eval.txt"),
    ("functions", "eval.txt"),
    ("expression", "eval.txt"),
    ("vim9script", "vim9.txt"),
    ("packages", "repeat.txt"),
    ("write-plugin", "usr_41.txt"),
    ("plugin", "usr_05.txt"),
];

static TABLE: Lazy<HashMap<String, String>> = Lazy::new(|| {
    BUILTIN_TAGS
        .iter()
        .map(|&(tag, file)| (tag.to_string(), format!("{VIMHELP_BASE}{file}.html#{tag}")))
        .collect()
});

/// The process-wide built-in tag dictionary: well-known help tags mapped to
/// their upstream destinations. Built on first use, read-only afterwards,
/// safe to share across concurrent renders.
pub fn builtin_tags() -> &'static HashMap<String, String> {
    &TABLE
}
