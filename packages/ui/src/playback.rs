use crate::navigation::js_string;

pub const BACKGROUND_VIDEO_ID: &str = "background-video";

/// Media events the background video reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Ended,
    LoadedData,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Rewind to the first frame, then play.
    Restart,
    Play,
}

impl PlaybackCommand {
    pub fn for_event(event: MediaEvent) -> Self {
        match event {
            MediaEvent::Ended => PlaybackCommand::Restart,
            MediaEvent::LoadedData | MediaEvent::Paused => PlaybackCommand::Play,
        }
    }

    /// Script applying the command to the video with `element_id`. Rejected
    /// play promises (autoplay policy) are swallowed.
    pub fn script(self, element_id: &str) -> String {
        let rewind = match self {
            PlaybackCommand::Restart => "v.currentTime = 0;",
            PlaybackCommand::Play => "",
        };
        format!(
            r#"(function(){{
                const v = document.getElementById({id});
                if(!v) return false;
                {rewind}
                const p = v.play();
                if(p && typeof p.catch === "function") p.catch(function(){{}});
                return true;
            }})()"#,
            id = js_string(element_id),
        )
    }
}
