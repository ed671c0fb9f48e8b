//! A stand-in interpreter that records how it was called.
//!
//! Each call appends one line to the log: the physical working directory followed by
//! every argument, tab-separated. `-m pip install -r FILE` fails like pip
//! does when FILE is missing; `-m streamlit` exits with `$FAKE_APP_EXIT`, or
//! with `$FAKE_APP_INTERRUPT` set, sends SIGINT to the launcher and itself
//! the way Ctrl-C reaches the whole foreground group.

pub(crate) const SCRIPT: &str = r#"#!/bin/sh
{
  printf '%s' "$(pwd -P)"
  for arg in "$@"; do printf '\t%s' "$arg"; done
  printf '\n'
} >> "$FAKE_PYTHON_LOG"

if [ "$1" = "-m" ] && [ "$2" = "pip" ] && [ "$4" = "-r" ]; then
  if [ ! -f "$5" ]; then
    echo "ERROR: Could not open requirements file: [Errno 2] No such file or directory: '$5'" >&2
    exit 1
  fi
fi

if [ "$1" = "-m" ] && [ "$2" = "streamlit" ]; then
  if [ -n "$FAKE_APP_INTERRUPT" ]; then
    kill -INT "$PPID"
    kill -INT "$$"
    sleep 1
  fi
  echo "You can now view your Streamlit app in your browser."
  exit "${FAKE_APP_EXIT:-0}"
fi

exit 0
"#;

/// One recorded interpreter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub(crate) cwd: String,
    pub(crate) args: Vec<String>,
}

impl Invocation {
    pub(crate) fn parse(line: &str) -> Self {
        let mut fields = line.split('\t');
        let cwd = fields.next().unwrap_or_default().to_string();
        Self { cwd, args: fields.map(str::to_string).collect() }
    }

    pub(crate) fn is_app_run(&self) -> bool {
        self.args.get(1).map(String::as_str) == Some("streamlit")
    }

    /// Arguments after `run <entry>`.
    pub(crate) fn app_arguments(&self) -> &[String] {
        self.args.get(4..).unwrap_or(&[])
    }
}
