use yew::prelude::*;
use crate::components::store_buttons::StoreButtons;
use crate::content::{COPYRIGHT, LEGAL_LINKS, SOCIAL_LINKS};
use crate::device::DeviceKind;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub device: DeviceKind,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="container-page footer-inner">
                <h3 class="footer-cta">{"What are you waiting for? Download Now!"}</h3>

                <StoreButtons device={props.device} centered={true} />

                <div class="footer-bottom">
                    <div class="footer-copyright">{COPYRIGHT}</div>

                    <div class="footer-socials">
                        {
                            SOCIAL_LINKS.iter().map(|(label, glyph)| html! {
                                <a key={*label} href="#" aria-label={*label}>{*glyph}</a>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="footer-legal">
                        {
                            LEGAL_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href}>{link.label}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(0, 0, 0, 0.35);
                }

                .footer-inner {
                    padding-top: 3rem;
                    padding-bottom: 3rem;
                }

                .footer-cta {
                    text-align: center;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: rgba(255, 255, 255, 0.9);
                }

                .footer-bottom {
                    margin-top: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }

                .footer-copyright {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.5);
                }

                .footer-socials {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .footer-socials a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }

                .footer-socials a:hover {
                    color: #fff;
                }

                .footer-legal {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .footer-legal a {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.5);
                    text-decoration: none;
                }

                .footer-legal a:hover {
                    color: rgba(255, 255, 255, 0.8);
                }

                @media (min-width: 768px) {
                    .footer-bottom {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn footer_carries_socials_and_legal_links() {
        let html = ServerRenderer::<Footer>::with_props(|| FooterProps { device: DeviceKind::Other })
            .render()
            .await;

        assert!(html.contains("Download Now!"));
        for (label, _) in SOCIAL_LINKS {
            assert!(html.contains(&format!("aria-label=\"{}\"", label)));
        }
        assert!(html.contains("Privacy Policies"));
        assert!(html.contains("Cookie Policy"));
        assert!(html.contains("© Atobue 2024"));
    }
}
