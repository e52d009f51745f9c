use yew::prelude::*;
use crate::components::{faq::Faq, footer::Footer, store_buttons::StoreButtons};
use crate::content::{
    Alignment, FeatureItem, FAQ_ITEMS, FEATURES, HERO_PANEL_TEXT, MORE_ABOUT_BODY,
    MORE_ABOUT_HEADING, NAV_LINKS,
};
use crate::device::{use_device_kind, DeviceKind};

#[function_component(LogoMark)]
fn logo_mark() -> Html {
    html! {
        <div class="logo-mark">
            <div class="logo-badge">
                <span>{"A"}</span>
            </div>
            <div class="logo-text">
                <div class="logo-name">{"ATOBUE"}</div>
                <div class="logo-caption">{"Atobue website"}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BulletHeadingProps {
    text: AttrValue,
}

#[function_component(BulletHeading)]
fn bullet_heading(props: &BulletHeadingProps) -> Html {
    html! {
        <div class="bullet-heading">
            <span class="bullet-dot"></span>
            <h3>{props.text.clone()}</h3>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PhoneStackProps {
    side: Alignment,
}

#[function_component(PhoneStack)]
fn phone_stack(props: &PhoneStackProps) -> Html {
    let side = if props.side.is_left() { "left" } else { "right" };

    html! {
        <div class={classes!("phone-stack", side)}>
            <div class="phone phone-back shadow-soft">
                <img src="/decor/Explore.png" alt="Phone mockup" width="160" height="220" />
            </div>
            <div class="phone phone-front shadow-soft">
                <img src="/decor/properties.png" alt="Phone mockup" width="180" height="240" />
            </div>
            <div class="phone-glow"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureRowProps {
    item: FeatureItem,
    device: DeviceKind,
}

#[function_component(FeatureRow)]
fn feature_row(props: &FeatureRowProps) -> Html {
    let FeatureRowProps { item, device } = props;
    // Right-aligned rows put the mockup on the right from md upwards.
    let flipped = !item.align.is_left();

    html! {
        <section class="feature-row">
            <div class="container-page">
                <div class={classes!("feature-grid", flipped.then(|| "flipped"))}>
                    <div class="feature-media">
                        <PhoneStack side={item.align} />
                    </div>
                    <div class="feature-copy">
                        <BulletHeading text={item.title} />
                        <p class="body-copy">{item.body}</p>
                        <StoreButtons device={*device} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct DeviceProps {
    device: DeviceKind,
}

#[function_component(DropletPanel)]
fn droplet_panel(props: &DeviceProps) -> Html {
    html! {
        <div class="droplet">
            <div class="droplet-shape"></div>
            <div class="card-soft shadow-soft droplet-card">
                <p>{HERO_PANEL_TEXT}</p>
                <StoreButtons device={props.device} centered={true} />
            </div>
        </div>
    }
}

#[function_component(MoreAbout)]
fn more_about(props: &DeviceProps) -> Html {
    html! {
        <section id="more" class="more-section">
            <div class="container-page">
                <h2 class="section-title">{"More about Atobue"}</h2>
                <div class="underline"></div>

                <div class="more-grid">
                    <div class="more-media">
                        <div class="mockup-trio">
                            <div class="phone trio-left shadow-soft">
                                <img src="/decor/Rent.png" alt="Phone mockup" width="160" height="220" />
                            </div>
                            <div class="phone trio-middle shadow-soft">
                                <img src="/decor/manage.png" alt="Phone mockup" width="180" height="240" />
                            </div>
                            <div class="phone trio-right shadow-soft">
                                <img src="/decor/caretaker.png" alt="Phone mockup" width="160" height="220" />
                            </div>
                            <div class="trio-glow"></div>
                        </div>
                    </div>

                    <div>
                        <BulletHeading text={MORE_ABOUT_HEADING} />
                        <p class="body-copy">{MORE_ABOUT_BODY}</p>
                        <StoreButtons device={props.device} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingContentProps {
    pub device: DeviceKind,
}

/// The whole page for an already known device kind.
#[function_component(LandingContent)]
pub fn landing_content(props: &LandingContentProps) -> Html {
    let device = props.device;

    html! {
        <main class="landing">
            // Background
            <div class="landing-bg"></div>
            <div class="landing-glow"></div>

            // Top nav
            <header class="top-bar">
                <div class="container-page top-bar-inner">
                    <LogoMark />

                    <nav class="anchor-nav">
                        {
                            NAV_LINKS.iter().map(|link| html! {
                                <a key={link.href} href={link.href}>{link.label}</a>
                            }).collect::<Html>()
                        }
                    </nav>

                    <div class="top-bar-icons">
                        <button class="icon-button">{"✕"}</button>
                        <button class="icon-button">{"⌂"}</button>
                        <button class="icon-button">{"⟳"}</button>
                        <button class="icon-button">{"⧉"}</button>
                    </div>
                </div>
            </header>

            // Hero
            <section class="hero">
                <div class="hero-mark" aria-hidden="true">
                    <img src="/decor/atobue-mark.png" alt="" width="800" height="800" />
                </div>
                <div class="hero-overlay" aria-hidden="true"></div>

                <div class="container-page hero-inner">
                    <div class="pill">{"Atobue"}</div>
                    <h1>
                        {"List, Manage, Rent "}<br class="md-only" />{"& Earn with "}
                        <span class="brand-text">{"Atobue"}</span>
                    </h1>
                    <DropletPanel {device} />
                </div>
            </section>

            // Features
            <section id="features" class="features-title">
                <div class="container-page">
                    <h2 class="section-title">{"Features"}</h2>
                    <div class="underline"></div>
                </div>
            </section>
            {
                FEATURES.iter().map(|item| html! {
                    <FeatureRow key={item.title} item={*item} {device} />
                }).collect::<Html>()
            }

            <MoreAbout {device} />

            // FAQ
            <section id="faq" class="faq-section">
                <div class="container-page">
                    <Faq items={FAQ_ITEMS} />
                </div>
            </section>

            <Footer {device} />

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                }

                .landing-bg {
                    position: fixed;
                    inset: 0;
                    z-index: -20;
                    background: linear-gradient(180deg, #111315 0%, #12181b 55%, #0f1113 100%);
                }

                .landing-glow {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    opacity: 0.9;
                    background: radial-gradient(800px 420px at 50% 12%, rgba(45, 179, 255, 0.22), rgba(0, 0, 0, 0));
                }

                .top-bar {
                    position: sticky;
                    top: 0;
                    z-index: 30;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(8px);
                }

                .top-bar-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }

                .logo-mark {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .logo-badge {
                    display: grid;
                    place-items: center;
                    height: 2.5rem;
                    width: 2.5rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                .logo-name {
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.025em;
                }

                .logo-caption {
                    font-size: 11px;
                    color: rgba(255, 255, 255, 0.6);
                }

                .anchor-nav {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                }

                .anchor-nav a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }

                .anchor-nav a:hover {
                    color: #fff;
                }

                .top-bar-icons {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .icon-button {
                    display: grid;
                    place-items: center;
                    height: 2.25rem;
                    width: 2.25rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.7);
                    cursor: pointer;
                }

                .icon-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 2.5rem 0;
                }

                .hero-mark {
                    position: absolute;
                    inset: 0;
                    z-index: -20;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .hero-mark img {
                    width: 100%;
                    max-width: 600px;
                    height: auto;
                    object-fit: contain;
                    opacity: 0.2;
                    transform: scale(0.75);
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: -10;
                    background: rgba(0, 0, 0, 0.4);
                }

                .hero-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 760px;
                    text-align: center;
                }

                .hero h1 {
                    margin-top: 1rem;
                    font-size: 1.875rem;
                    font-weight: 600;
                    line-height: 1.25;
                }

                .brand-text {
                    color: var(--brand);
                }

                .md-only {
                    display: none;
                }

                .droplet {
                    position: relative;
                    margin: 1.5rem auto 0;
                    width: 100%;
                    max-width: 520px;
                }

                .droplet-shape {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    border-radius: 40px;
                    opacity: 0.9;
                    background: radial-gradient(120% 120% at 50% 0%, rgba(45, 179, 255, 0.28), rgba(255, 255, 255, 0.04) 55%, rgba(0, 0, 0, 0) 100%);
                }

                .droplet-card {
                    padding: 1.5rem;
                }

                .droplet-card p {
                    text-align: center;
                    font-size: 0.875rem;
                    line-height: 1.5rem;
                    color: rgba(255, 255, 255, 0.75);
                }

                .features-title {
                    margin-top: 3rem;
                }

                .feature-row {
                    margin-top: 2.5rem;
                }

                .feature-grid {
                    display: grid;
                    align-items: center;
                    gap: 2rem;
                }

                .bullet-heading {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: var(--brand);
                }

                .bullet-heading h3 {
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                .bullet-dot {
                    height: 0.5rem;
                    width: 0.5rem;
                    border-radius: 9999px;
                    background: var(--brand);
                }

                .body-copy {
                    margin-top: 0.75rem;
                    font-size: 0.875rem;
                    line-height: 1.5rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .phone-stack {
                    position: relative;
                    height: 260px;
                    width: 100%;
                    max-width: 320px;
                    margin: 0 auto;
                }

                .phone {
                    position: absolute;
                    overflow: hidden;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    left: 50%;
                    transform: translateX(-50%);
                }

                .phone img {
                    height: 100%;
                    width: 100%;
                    object-fit: cover;
                }

                .phone-back {
                    top: 2.5rem;
                    height: 220px;
                    width: 160px;
                }

                .phone-front {
                    top: 0;
                    height: 240px;
                    width: 180px;
                }

                .phone-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    opacity: 0.4;
                    filter: blur(40px);
                    background: rgba(45, 179, 255, 0.1);
                }

                .more-section {
                    margin-top: 3.5rem;
                }

                .more-grid {
                    margin-top: 2.5rem;
                    display: grid;
                    align-items: center;
                    gap: 2rem;
                }

                .more-media {
                    display: flex;
                    justify-content: center;
                }

                .mockup-trio {
                    position: relative;
                    height: 280px;
                    width: 100%;
                    max-width: 520px;
                }

                .trio-left, .trio-right {
                    top: 2rem;
                    height: 220px;
                    width: 160px;
                }

                .trio-middle {
                    top: 1rem;
                    height: 240px;
                    width: 180px;
                }

                .trio-glow {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    border-radius: 40px;
                    background: radial-gradient(120% 120% at 50% 0%, rgba(45, 179, 255, 0.2), rgba(0, 0, 0, 0) 65%);
                }

                .faq-section {
                    margin-top: 4rem;
                    padding-bottom: 4rem;
                }

                @media (min-width: 768px) {
                    .anchor-nav {
                        display: flex;
                    }

                    .md-only {
                        display: block;
                    }

                    .hero {
                        padding: 3.5rem 0;
                    }

                    .hero h1 {
                        font-size: 3rem;
                    }

                    .hero-mark img {
                        max-width: 800px;
                        opacity: 0.3;
                        transform: none;
                    }

                    .hero-overlay {
                        background: rgba(0, 0, 0, 0.3);
                    }

                    .features-title {
                        margin-top: 4rem;
                    }

                    .feature-row {
                        margin-top: 3.5rem;
                    }

                    .feature-grid, .more-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                    }

                    .feature-grid.flipped .feature-media {
                        order: 2;
                    }

                    .feature-grid.flipped .feature-copy {
                        order: 1;
                    }

                    .bullet-heading h3 {
                        font-size: 1rem;
                    }

                    .body-copy {
                        font-size: 15px;
                    }

                    .phone-stack {
                        margin: 0;
                    }

                    .phone-stack.left .phone-back {
                        left: 0;
                        transform: none;
                    }

                    .phone-stack.left .phone-front {
                        left: 3rem;
                        transform: none;
                    }

                    .phone-stack.right .phone-back {
                        left: auto;
                        right: 0;
                        transform: none;
                    }

                    .phone-stack.right .phone-front {
                        left: auto;
                        right: 3rem;
                        transform: none;
                    }

                    .more-section {
                        margin-top: 5rem;
                    }

                    .more-media {
                        justify-content: flex-start;
                    }

                    .trio-left {
                        left: 0;
                        transform: none;
                    }

                    .trio-middle {
                        left: 6rem;
                        transform: none;
                    }

                    .trio-right {
                        left: 13rem;
                        transform: none;
                    }

                    .faq-section {
                        margin-top: 5rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let device = use_device_kind();

    html! {
        <LandingContent {device} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(device: DeviceKind) -> String {
        ServerRenderer::<LandingContent>::with_props(move || LandingContentProps { device })
            .render()
            .await
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    const IOS_BADGE: &str = "aria-label=\"Download on the App Store\"";
    const ANDROID_BADGE: &str = "aria-label=\"Get it on Google Play\"";

    // Hero panel, three feature rows, "more about" panel and footer.
    const BADGE_SLOTS: usize = 6;

    #[tokio::test]
    async fn page_has_section_anchors() {
        let html = render(DeviceKind::Other).await;
        for id in ["id=\"features\"", "id=\"more\"", "id=\"faq\""] {
            assert_eq!(count(&html, id), 1, "{id}");
        }
        for link in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href)));
        }
    }

    #[tokio::test]
    async fn first_faq_entry_open_on_load() {
        let html = render(DeviceKind::Other).await;
        assert_eq!(count(&html, "aria-expanded=\"true\""), 1);
        assert_eq!(count(&html, "aria-expanded=\"false\""), FAQ_ITEMS.len() - 1);
        assert!(html.contains(FAQ_ITEMS[0].answer));
    }

    #[tokio::test]
    async fn features_render_in_order_with_alternating_sides() {
        let html = render(DeviceKind::Other).await;
        let positions: Vec<usize> = FEATURES.iter().map(|f| html.find(f.title).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(count(&html, "phone-stack left"), 2);
        assert_eq!(count(&html, "phone-stack right"), 1);
        assert_eq!(count(&html, "feature-grid flipped"), 1);
    }

    #[tokio::test]
    async fn android_shows_only_google_play() {
        let html = render(DeviceKind::Android).await;
        assert_eq!(count(&html, ANDROID_BADGE), BADGE_SLOTS);
        assert_eq!(count(&html, IOS_BADGE), 0);
    }

    #[tokio::test]
    async fn ios_shows_only_app_store() {
        let html = render(DeviceKind::Ios).await;
        assert_eq!(count(&html, IOS_BADGE), BADGE_SLOTS);
        assert_eq!(count(&html, ANDROID_BADGE), 0);
    }

    #[tokio::test]
    async fn undetected_device_shows_both_badges() {
        // Effects do not run during server rendering, so this is the pre-detection state.
        let html = ServerRenderer::<Landing>::new().render().await;
        assert_eq!(count(&html, IOS_BADGE), BADGE_SLOTS);
        assert_eq!(count(&html, ANDROID_BADGE), BADGE_SLOTS);
    }
}
