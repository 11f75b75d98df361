//! `askpdf ask`: one submission without a screen, driven through the same core.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context};
use askpdf_core::{update, AppState, Msg, SelectedFile, SubmitOutcome};
use askpdf_logging::askpdf_debug;

use super::config::AppConfig;
use super::effects::EffectRunner;

/// Exit status when the form was incomplete and nothing was sent.
const EXIT_NOTHING_SENT: u8 = 2;
const WAIT_SLICE: Duration = Duration::from_secs(1);

pub fn run_ask(config: &AppConfig, query: String, files: Vec<PathBuf>) -> anyhow::Result<ExitCode> {
    let runner = EffectRunner::new(config.submit_settings()).context("starting engine")?;
    let (answer, outcome) = ask(&runner, query, files)?;

    match outcome {
        None => {
            eprintln!("Nothing to submit: select at least one file and enter a question.");
            Ok(ExitCode::from(EXIT_NOTHING_SENT))
        }
        Some(outcome) => {
            println!("{answer}");
            Ok(match outcome {
                SubmitOutcome::Answered(_) => ExitCode::SUCCESS,
                SubmitOutcome::Failed => ExitCode::FAILURE,
            })
        }
    }
}

/// Returns the text the form would show and how the request ended, or
/// `None` for the outcome when the submission was blocked.
fn ask(
    runner: &EffectRunner,
    query: String,
    files: Vec<PathBuf>,
) -> anyhow::Result<(String, Option<SubmitOutcome>)> {
    let selection = files.into_iter().map(SelectedFile::from_path).collect();
    let mut state = AppState::new();
    for msg in [
        Msg::FilesSelected(selection),
        Msg::QueryChanged(query),
        Msg::SubmitClicked,
    ] {
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
    }
    if !state.is_loading() {
        return Ok((String::new(), None));
    }

    let mut outcome = None;
    while state.is_loading() {
        // No deadline here; `--timeout` bounds the request itself.
        let Some(msg) = runner
            .wait(WAIT_SLICE)
            .context("waiting for the backend answer")?
        else {
            askpdf_debug!("Still waiting for the backend");
            continue;
        };
        if let Msg::SubmitCompleted { outcome: done, .. } = &msg {
            outcome = Some(done.clone());
        }
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
    }

    let Some(outcome) = outcome else {
        bail!("request finished without a completion");
    };
    Ok((state.view().answer.unwrap_or_default(), Some(outcome)))
}

#[cfg(test)]
mod tests {
    use askpdf_core::BACKEND_ERROR_MESSAGE;
    use askpdf_engine::SubmitSettings;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn runner_for(url: &str) -> EffectRunner {
        EffectRunner::new(SubmitSettings::new(Url::parse(url).unwrap())).unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn ask_prints_backend_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "result": "# Result\nok" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("scan.pdf");
        std::fs::write(&file, b"%PDF-1.6").unwrap();

        let runner = runner_for(&server.uri());
        let (answer, outcome) = tokio::task::spawn_blocking(move || {
            ask(&runner, "summary".to_string(), vec![file]).unwrap()
        })
        .await
        .unwrap();

        assert_eq!(answer, "# Result\nok");
        assert_eq!(
            outcome,
            Some(SubmitOutcome::Answered("# Result\nok".to_string()))
        );
    }

    #[test]
    fn unreadable_file_yields_fallback_message() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner_for("http://127.0.0.1:9/ask");

        let (answer, outcome) = ask(
            &runner,
            "summary".to_string(),
            vec![dir.path().join("missing.pdf")],
        )
        .unwrap();
        assert_eq!(answer, BACKEND_ERROR_MESSAGE);
        assert_eq!(outcome, Some(SubmitOutcome::Failed));
    }

    #[test]
    fn blocked_submission_sends_nothing() {
        let runner = runner_for("http://127.0.0.1:9/ask");
        let (answer, outcome) = ask(&runner, String::new(), vec![PathBuf::from("a.pdf")]).unwrap();
        assert!(answer.is_empty());
        assert_eq!(outcome, None);
        assert!(runner.poll().is_empty());
    }
}
