use log::{debug, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, HtmlAudioElement, HtmlMediaElement};

/// Starts `src` playing once. Browsers that block autoplay reject the play
/// promise; that is logged and otherwise ignored.
pub fn play_background_audio(src: &str) {
    match HtmlAudioElement::new_with_src(src) {
        Ok(audio) => start_playback(&audio, src),
        Err(e) => warn!("Could not create audio element for {}: {:?}", src, e),
    }
}

/// The `muted` content attribute written after creation does not mute the
/// element, and unmuted media is refused autoplay, so set the properties.
pub fn prepare_muted_loop(media: &HtmlMediaElement) {
    media.set_muted(true);
    media.set_loop(true);
}

pub fn play_muted_loop(media: &HtmlMediaElement) {
    prepare_muted_loop(media);
    start_playback(media, &media.current_src());
}

fn start_playback(media: &HtmlMediaElement, label: &str) {
    match media.play() {
        Ok(promise) => {
            let label = label.to_string();
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    debug!("Playback of {} did not start: {:?}", label, e);
                }
            });
        }
        Err(e) => debug!("Playback of {} did not start: {:?}", label, e),
    }
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = window() else {
        warn!("No window available to open {}", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => debug!("Opened {} in a new tab", url),
        Ok(None) => warn!("Popup blocked while opening {}", url),
        Err(e) => warn!("Failed to open {}: {:?}", url, e),
    }
}
