use dioxus::document::eval;

use services::Narrator;

use crate::vm::Tone;

pub(super) const FOCUS_PLAY_ROOT_JS: &str = r#"document.getElementById("play-root")?.focus();"#;

const CANCEL_SPEECH_JS: &str = r#"(function() {
    if ("speechSynthesis" in window) window.speechSynthesis.cancel();
})();"#;

pub(super) fn speak_script(text: &str) -> String {
    format!(
        r#"(function() {{
                if (!("speechSynthesis" in window)) return;
                window.speechSynthesis.cancel();
                const utterance = new SpeechSynthesisUtterance({text:?});
                utterance.rate = 0.95;
                window.speechSynthesis.speak(utterance);
            }})();"#,
    )
}

pub(super) fn tone_script(tone: Tone) -> String {
    let Tone {
        frequency_hz,
        duration_ms,
        wave,
    } = tone;
    format!(
        r#"(function() {{
                const Ctx = window.AudioContext || window.webkitAudioContext;
                if (!Ctx) return;
                const ctx = window.__riverAudio || (window.__riverAudio = new Ctx());
                const osc = ctx.createOscillator();
                const gain = ctx.createGain();
                osc.type = {wave:?};
                osc.frequency.value = {frequency_hz};
                gain.gain.setValueAtTime(0.2, ctx.currentTime);
                gain.gain.exponentialRampToValueAtTime(0.001, ctx.currentTime + {duration_ms} / 1000);
                osc.connect(gain);
                gain.connect(ctx.destination);
                osc.start();
                osc.stop(ctx.currentTime + {duration_ms} / 1000);
            }})();"#,
    )
}

/// Speech synthesis in the webview.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct WebNarrator;

impl Narrator for WebNarrator {
    fn speak(&mut self, text: &str) {
        let _ = eval(&speak_script(text));
    }

    fn cancel(&mut self) {
        let _ = eval(CANCEL_SPEECH_JS);
    }
}
