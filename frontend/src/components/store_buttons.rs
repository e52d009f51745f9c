use yew::prelude::*;
use crate::config;
use crate::device::DeviceKind;

#[derive(Properties, PartialEq)]
pub struct StoreButtonsProps {
    pub device: DeviceKind,
    #[prop_or_default]
    pub centered: bool,
}

#[function_component(StoreButtons)]
pub fn store_buttons(props: &StoreButtonsProps) -> Html {
    let StoreButtonsProps { device, centered } = props;

    html! {
        <div class={classes!("store-buttons", centered.then(|| "centered"))}>
            if device.shows_ios_badge() {
                <a class="btn-store ios" href={config::app_store_url()} aria-label="Download on the App Store">
                    <span class="store-glyph">{""}</span>
                    <span class="store-text">
                        <span class="store-kicker">{"DOWNLOAD ON"}</span>
                        <span class="store-name">{"App Store"}</span>
                    </span>
                </a>
            }
            if device.shows_android_badge() {
                <a class="btn-store android" href={config::play_store_url()} aria-label="Get it on Google Play">
                    <span class="store-glyph">{"▶"}</span>
                    <span class="store-text">
                        <span class="store-kicker">{"DOWNLOAD ON"}</span>
                        <span class="store-name">{"Google Play"}</span>
                    </span>
                </a>
            }
            <style>
                {r#"
                .store-buttons {
                    margin-top: 1rem;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 0.75rem;
                }

                .store-buttons.centered {
                    justify-content: center;
                }

                .store-glyph {
                    font-size: 1.125rem;
                }

                .store-text {
                    line-height: 1.2;
                }

                .store-kicker {
                    display: block;
                    font-size: 10px;
                    color: rgba(255, 255, 255, 0.6);
                }

                .store-name {
                    display: block;
                    font-weight: 500;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(device: DeviceKind) -> String {
        ServerRenderer::<StoreButtons>::with_props(move || StoreButtonsProps { device, centered: false })
            .render()
            .await
    }

    #[tokio::test]
    async fn other_shows_both_badges() {
        let html = render(DeviceKind::Other).await;
        assert!(html.contains("App Store"));
        assert!(html.contains("Google Play"));
    }

    #[tokio::test]
    async fn ios_shows_app_store_only() {
        let html = render(DeviceKind::Ios).await;
        assert!(html.contains("App Store"));
        assert!(!html.contains("Google Play"));
    }

    #[tokio::test]
    async fn android_shows_google_play_only() {
        let html = render(DeviceKind::Android).await;
        assert!(!html.contains("App Store"));
        assert!(html.contains("Google Play"));
    }
}
