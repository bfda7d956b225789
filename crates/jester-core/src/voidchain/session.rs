//! Voidchain session state machine.
//!
//! `VoidSession` holds the chain and the fixed session identifier and moves
//! through `Init → AwaitEntryConfirmation → AwaitWish → Done`. Each step
//! checks the current state before recording its block.
//! [`run_session`] drives a full session over line-oriented input.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::chain::Chain;
use super::platform::Platform;
use super::reply::VoidReply;
use crate::config::JesterConfig;
use crate::error::{JesterError, JesterResult};
use crate::random::RandomSource;

/// Length of the random session identifier.
pub const SESSION_ID_LEN: usize = 8;

/// Prompt before the visitor steps into the void.
pub const ENTRY_PROMPT: &str = "Trykk Enter for å fortsette inn i tomrommet... ";

/// Prompt asking for the visitor's wish.
pub const WISH_PROMPT: &str = "Hva ønsker du i dag fra voiden? ";

/// Where a voidchain session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoidState {
    /// The visitor has not been greeted yet.
    Init,
    /// Waiting for the visitor to confirm entry.
    AwaitEntryConfirmation,
    /// Waiting for the visitor's wish.
    AwaitWish,
    /// The wish was answered; only the file write remains or is done.
    Done,
}

impl VoidState {
    /// Name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "Init",
            Self::AwaitEntryConfirmation => "AwaitEntryConfirmation",
            Self::AwaitWish => "AwaitWish",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for VoidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single visitor session.
#[derive(Debug)]
pub struct VoidSession {
    state: VoidState,
    platform: Platform,
    session_id: String,
    output_path: PathBuf,
    chain: Chain,
    written: bool,
}

impl VoidSession {
    /// Create a session with a fresh random identifier. The output file is
    /// `voidchain_<id>.json` inside `output_dir`.
    pub fn new<R>(platform: Platform, rng: &mut R, output_dir: &Path) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let session_id = rng.token(SESSION_ID_LEN);
        let output_path = output_dir.join(format!("voidchain_{session_id}.json"));
        tracing::debug!(%session_id, platform = %platform, "voidchain session created");
        Self {
            state: VoidState::Init,
            platform,
            session_id,
            output_path,
            chain: Chain::new(),
            written: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> VoidState {
        self.state
    }

    /// Visitor platform.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// The session identifier embedded in the file name.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Where the chain will be written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Blocks recorded so far.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    fn expect(&self, expected: VoidState) -> JesterResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(JesterError::OutOfOrder {
                expected: expected.name(),
                found: self.state.name(),
            })
        }
    }

    /// Record the visitor's arrival (block 1, with platform).
    pub fn arrive(&mut self) -> JesterResult<()> {
        self.expect(VoidState::Init)?;
        let os = self.platform.identifier().to_string();
        self.chain.append("visitor arrived", Some(os));
        self.state = VoidState::AwaitEntryConfirmation;
        Ok(())
    }

    /// Record entry into the void (block 2). The confirmation text is
    /// discarded.
    pub fn confirm_entry(&mut self, _confirmation: &str) -> JesterResult<()> {
        self.expect(VoidState::AwaitEntryConfirmation)?;
        self.chain.append("initiate void entry", None);
        self.state = VoidState::AwaitWish;
        Ok(())
    }

    /// Record the raw wish (block 3) and classify it.
    pub fn make_wish(&mut self, wish: &str) -> JesterResult<VoidReply> {
        self.expect(VoidState::AwaitWish)?;
        self.chain.append(format!("requested: {wish}"), None);
        self.state = VoidState::Done;
        Ok(VoidReply::classify(wish))
    }

    /// Write the chain to the session file. Only valid once, after the wish.
    pub fn finish(&mut self) -> JesterResult<&Path> {
        self.expect(VoidState::Done)?;
        if self.written {
            return Err(JesterError::OutOfOrder {
                expected: "Done (unwritten)",
                found: "Done (written)",
            });
        }
        self.chain.write_to(&self.output_path)?;
        self.written = true;
        Ok(&self.output_path)
    }
}

/// Print the welcome banner for `platform`.
pub fn print_intro<W: Write + ?Sized>(out: &mut W, platform: &Platform) -> JesterResult<()> {
    writeln!(out, "\n🌀 VELKOMMEN TIL VOIDCHAIN 🌀")?;
    writeln!(out, "Du er oppdaget som en {platform}-bruker.")?;
    writeln!(out, "{}", platform.greeting())?;
    Ok(())
}

/// Write `prompt`, then read one line without its terminator. EOF reads as
/// an empty line; invalid UTF-8 is replaced with U+FFFD.
fn prompt_line<I, W>(input: &mut I, out: &mut W, prompt: &str) -> JesterResult<String>
where
    I: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut raw = Vec::new();
    input.read_until(b'\n', &mut raw)?;
    if raw.ends_with(b"\n") {
        raw.pop();
        if raw.ends_with(b"\r") {
            raw.pop();
        }
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Run a complete voidchain session and return the written file path.
pub fn run_session<I, W, R>(
    input: &mut I,
    out: &mut W,
    rng: &mut R,
    config: &JesterConfig,
) -> JesterResult<PathBuf>
where
    I: BufRead + ?Sized,
    W: Write + ?Sized,
    R: RandomSource + ?Sized,
{
    let platform = config
        .platform
        .as_deref()
        .map(Platform::from_identifier)
        .unwrap_or_else(Platform::detect);

    let mut session = VoidSession::new(platform, rng, &config.output_dir);
    print_intro(out, session.platform())?;
    session.arrive()?;

    let confirmation = prompt_line(input, out, ENTRY_PROMPT)?;
    session.confirm_entry(&confirmation)?;

    let wish = prompt_line(input, out, WISH_PROMPT)?;
    let reply = session.make_wish(&wish)?;

    writeln!(out, "\n--- RESPONSE FRA VOIDEN ---")?;
    writeln!(out, "{reply}")?;
    out.flush()?;

    Ok(session.finish()?.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voidchain::record::ChainRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn run(platform: &str, input: &str, seed: u64) -> (TempDir, String, PathBuf) {
        let dir = TempDir::new().unwrap();
        let config = JesterConfig::default()
            .with_output_dir(dir.path())
            .with_platform(Some(platform.to_string()));
        let mut rng = StdRng::seed_from_u64(seed);
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        let path = run_session(&mut reader, &mut out, &mut rng, &config).unwrap();
        (dir, String::from_utf8(out).unwrap(), path)
    }

    fn read_chain(path: &Path) -> Vec<ChainRecord> {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn linux_coffee_session() {
        let (_dir, out, path) = run("linux", "\njeg vil ha kaffe\n", 1);
        let records = read_chain(&path);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].os.as_deref(), Some("linux"));
        assert_eq!(records[0].event, "visitor arrived");
        assert_eq!(records[1].event, "initiate void entry");
        assert_eq!(records[2].event, "requested: jeg vil ha kaffe");
        assert!(records[1].os.is_none() && records[2].os.is_none());

        assert!(out.contains("Du er oppdaget som en linux-bruker."));
        assert!(out.contains("Du har nøkkelen til shell."));
        assert!(out.contains("--- RESPONSE FRA VOIDEN ---"));
        assert!(out.contains(VoidReply::Coffee.text()));
    }

    #[test]
    fn blocks_are_one_two_three() {
        let (_dir, _, path) = run("darwin", "ok\nmer lys\n", 2);
        let blocks: Vec<_> = read_chain(&path).iter().map(|r| r.block).collect();
        assert_eq!(blocks, vec![1, 2, 3]);
    }

    #[test]
    fn light_wins_over_coffee() {
        let (_dir, out, _) = run("win32", "\nlys og kaffe\n", 3);
        assert!(out.contains(VoidReply::Light.text()));
        assert!(!out.contains(VoidReply::Coffee.text()));
        assert!(out.contains("Windows-vandrer"));
    }

    #[test]
    fn fallback_reply() {
        let (_dir, out, _) = run("linux", "\nfred i verden\n", 4);
        assert!(out.contains(VoidReply::Drift.text()));
    }

    #[test]
    fn unknown_platform_default_greeting() {
        let (_dir, out, path) = run("plan9", "\n\n", 5);
        assert!(out.contains("Ukjent operativsystem"));
        assert_eq!(read_chain(&path)[0].os.as_deref(), Some("plan9"));
    }

    #[test]
    fn wish_keeps_raw_text_without_line_ending() {
        let (_dir, _, path) = run("linux", "\r\n  Kaffe, takk  \r\n", 6);
        assert_eq!(read_chain(&path)[2].event, "requested:   Kaffe, takk  ");
    }

    #[test]
    fn closed_input_still_completes_chain() {
        let (_dir, out, path) = run("linux", "", 7);
        let records = read_chain(&path);
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].event, "requested: ");
        assert!(out.contains(VoidReply::Drift.text()));
    }

    #[test]
    fn invalid_utf8_wish_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let config = JesterConfig::default()
            .with_output_dir(dir.path())
            .with_platform(Some("linux".to_string()));
        let mut rng = StdRng::seed_from_u64(13);
        let mut reader: &[u8] = b"\xfe\r\njeg vil ha kaffe \xff\n";
        let mut out = Vec::new();
        let path = run_session(&mut reader, &mut out, &mut rng, &config).unwrap();

        let records = read_chain(&path);
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].event, "requested: jeg vil ha kaffe \u{fffd}");
        assert!(String::from_utf8(out).unwrap().contains(VoidReply::Coffee.text()));
    }

    #[test]
    fn file_name_embeds_session_id() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let session = VoidSession::new(Platform::Linux, &mut rng, dir.path());
        let id = session.session_id().to_string();
        assert_eq!(id.len(), SESSION_ID_LEN);
        assert_eq!(
            session.output_path(),
            dir.path().join(format!("voidchain_{id}.json"))
        );
    }

    #[test]
    fn steps_advance_state() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut s = VoidSession::new(Platform::MacOs, &mut rng, dir.path());
        assert_eq!(s.state(), VoidState::Init);
        s.arrive().unwrap();
        assert_eq!(s.state(), VoidState::AwaitEntryConfirmation);
        assert_eq!(s.chain().len(), 1);
        s.confirm_entry("whatever").unwrap();
        assert_eq!(s.state(), VoidState::AwaitWish);
        assert_eq!(s.make_wish("lys").unwrap(), VoidReply::Light);
        assert_eq!(s.state(), VoidState::Done);
        let path = s.finish().unwrap().to_path_buf();
        assert!(path.exists());
    }

    #[test]
    fn out_of_order_steps_rejected() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(10);
        let mut s = VoidSession::new(Platform::Linux, &mut rng, dir.path());

        let err = s.make_wish("kaffe").unwrap_err();
        assert!(matches!(
            err,
            JesterError::OutOfOrder {
                expected: "AwaitWish",
                found: "Init"
            }
        ));
        assert!(s.finish().is_err());
        assert!(s.chain().is_empty());

        s.arrive().unwrap();
        assert!(s.arrive().is_err());
        assert_eq!(s.chain().len(), 1);
    }

    #[test]
    fn finish_writes_only_once() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut s = VoidSession::new(Platform::Linux, &mut rng, dir.path());
        s.arrive().unwrap();
        s.confirm_entry("").unwrap();
        s.make_wish("").unwrap();
        s.finish().unwrap();
        assert!(s.finish().is_err());
    }

    #[test]
    fn unwritable_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = JesterConfig::default()
            .with_output_dir(dir.path().join("missing"))
            .with_platform(Some("linux".to_string()));
        let mut rng = StdRng::seed_from_u64(12);
        let mut reader = "\nkaffe\n".as_bytes();
        let mut out = Vec::new();
        let err = run_session(&mut reader, &mut out, &mut rng, &config).unwrap_err();
        assert!(matches!(err, JesterError::Io(_)));
    }
}
