//! CSS styles for the page.
//!
//! The stylesheet is inlined into the document head so the exported page
//! is a single self-contained file.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use modernsite::styles::SITE_CSS;
//!
//! let my_css = ".hero { background: #000; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.contains(".hero"));
//! ```
//!
//! # Breakpoint
//!
//! Everything at or above 768px shows the full navigation bar; below it the
//! bar collapses into the toggle button and the mobile panel.

/// Viewport width (px) above which the full navigation bar is visible.
pub const NAV_BREAKPOINT_PX: u32 = 768;

/// Content-Security-Policy for the exported page (inline style and script, no network).
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";

/// Complete CSS for the page - light marketing theme.
///
/// Covers:
/// - Layout primitives (container, section spacing, grids)
/// - Header bar, toggle button and mobile panel
/// - Buttons and cards
/// - Pricing highlight treatment
/// - Fade/slide entrance transitions
pub const SITE_CSS: &str = r#"
:root {
    --blue-50: #eff6ff;
    --blue-100: #dbeafe;
    --blue-300: #93c5fd;
    --blue-500: #3b82f6;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --indigo-100: #e0e7ff;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-200: #e5e7eb;
    --gray-400: #9ca3af;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --green-500: #22c55e;
    --radius: 12px;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { font-family: var(--font); color: var(--gray-900); background: #fff; line-height: 1.5; }
a { color: inherit; text-decoration: none; }
ul { list-style: none; }

.page { min-height: 100vh; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.section { padding: 96px 0; }
.section-header { text-align: center; margin-bottom: 64px; }
.section-title { font-size: 36px; font-weight: 700; margin-bottom: 16px; }
.section-description { font-size: 20px; color: var(--gray-600); max-width: 640px; margin: 0 auto; }

/* Buttons */
.btn {
    display: inline-flex; align-items: center; justify-content: center; gap: 8px;
    padding: 12px 24px; border-radius: 8px; font: inherit; font-weight: 500;
    cursor: pointer; border: 2px solid transparent;
    transition: background-color 0.2s, border-color 0.2s, color 0.2s;
}
.btn-primary { background: var(--blue-600); color: #fff; }
.btn-primary:hover { background: var(--blue-700); }
.btn-secondary { background: #fff; color: var(--blue-600); border-color: var(--blue-600); }
.btn-secondary:hover { background: var(--blue-50); }
.btn-muted { background: var(--gray-100); color: var(--gray-900); }
.btn-muted:hover { background: var(--gray-200); }
.btn-block { width: 100%; }

/* Header */
.site-header {
    position: fixed; top: 0; width: 100%; z-index: 50;
    background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(4px);
    border-bottom: 1px solid var(--gray-200);
}
.header-bar { display: flex; justify-content: space-between; align-items: center; padding: 16px 0; }
.brand { font-size: 24px; font-weight: 700; }
.nav-links { display: flex; gap: 32px; }
.nav-link { color: var(--gray-700); font-weight: 500; transition: color 0.2s; }
.nav-link:hover { color: var(--blue-600); }
.nav-actions { display: flex; gap: 16px; align-items: center; }
.menu-toggle { display: none; background: none; border: 0; color: var(--gray-700); cursor: pointer; }
.menu-toggle:hover { color: var(--gray-900); }
.mobile-panel { display: none; padding: 16px 0; border-top: 1px solid var(--gray-200); }
.mobile-panel-links { display: flex; flex-direction: column; gap: 16px; }
.mobile-panel-actions { display: flex; flex-direction: column; gap: 8px; padding-top: 16px; }

@media (max-width: 767px) {
    .nav-links, .nav-actions { display: none; }
    .menu-toggle { display: block; }
    .mobile-panel { display: block; }
}

/* Hero */
.hero { padding: 160px 0 96px; background: linear-gradient(135deg, var(--blue-50), var(--indigo-100)); text-align: center; }
.hero-title { font-size: 56px; font-weight: 700; line-height: 1.1; margin-bottom: 24px; }
.hero-title-accent { display: block; color: var(--blue-600); }
.hero-description { font-size: 20px; color: var(--gray-600); max-width: 640px; margin: 0 auto 32px; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-bottom: 48px; }
.hero-stats-card {
    max-width: 900px; margin: 0 auto; padding: 32px; background: #fff;
    border: 1px solid var(--gray-200); border-radius: 16px;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

/* Stats */
.stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 24px; text-align: center; }
.stat-glyph {
    width: 64px; height: 64px; margin: 0 auto 12px; border-radius: 50%;
    background: var(--blue-100); color: var(--blue-600);
    display: flex; align-items: center; justify-content: center;
}
.stat-value { font-size: 30px; font-weight: 700; color: var(--blue-600); }
.about .stat-value { font-size: 24px; color: var(--gray-900); }
.stat-label { color: var(--gray-600); }

/* Features */
.features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 32px; }
.feature-card {
    padding: 24px; border: 1px solid var(--gray-200); border-radius: var(--radius); background: #fff;
    transition: border-color 0.3s, box-shadow 0.3s;
}
.feature-card:hover { border-color: var(--blue-300); box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.feature-icon { color: var(--blue-600); margin-bottom: 16px; transition: transform 0.2s; }
.feature-card:hover .feature-icon { transform: scale(1.1); }
.feature-title { font-size: 20px; font-weight: 600; margin-bottom: 12px; }
.feature-description { color: var(--gray-600); }

/* About */
.about { background: var(--gray-50); }
.about-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 48px; align-items: center; }
.about-paragraph { font-size: 18px; color: var(--gray-600); margin-bottom: 24px; }
.values-card { background: #fff; border: 1px solid var(--gray-200); border-radius: 16px; padding: 32px; }
.values-title { font-size: 24px; font-weight: 700; margin-bottom: 24px; }
.values-list { display: flex; flex-direction: column; gap: 16px; }
.value { display: flex; gap: 16px; align-items: flex-start; }
.value-dot { width: 8px; height: 8px; margin-top: 12px; border-radius: 50%; background: var(--blue-600); flex-shrink: 0; }
.value-title { font-weight: 600; margin-bottom: 4px; }
.value-description { color: var(--gray-600); }

/* Services */
.pricing-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 32px; }
.pricing-card {
    position: relative; padding: 32px; border: 2px solid var(--gray-200); border-radius: 16px;
    transition: border-color 0.3s, transform 0.3s;
}
.pricing-card:hover { border-color: var(--blue-300); }
.pricing-card-highlighted { border-color: var(--blue-500); transform: scale(1.05); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
.pricing-badge { position: absolute; top: -16px; left: 50%; transform: translateX(-50%); }
.pricing-badge span { background: var(--blue-500); color: #fff; padding: 8px 16px; border-radius: 999px; font-size: 14px; font-weight: 500; }
.pricing-head { text-align: center; margin-bottom: 32px; }
.pricing-name { font-size: 24px; font-weight: 700; margin-bottom: 8px; }
.pricing-description { color: var(--gray-600); margin-bottom: 16px; }
.pricing-price { font-size: 36px; font-weight: 700; }
.pricing-period { font-size: 18px; font-weight: 400; color: var(--gray-600); }
.pricing-features { display: flex; flex-direction: column; gap: 16px; margin-bottom: 32px; }
.pricing-feature { display: flex; align-items: center; gap: 12px; color: var(--gray-700); }
.pricing-check { color: var(--green-500); flex-shrink: 0; }

/* Contact */
.contact { background: var(--blue-50); }
.contact-actions { display: flex; justify-content: center; }

/* Footer */
.site-footer { background: var(--gray-900); color: #fff; padding: 96px 0 48px; }
.footer-grid { display: grid; grid-template-columns: 2fr repeat(4, 1fr); gap: 32px; }
.footer-title { font-size: 24px; font-weight: 700; margin-bottom: 16px; }
.footer-blurb { color: var(--gray-400); margin-bottom: 24px; }
.footer-social { display: flex; gap: 16px; }
.social-link { background: var(--gray-800); padding: 8px; border-radius: 8px; display: inline-flex; transition: background-color 0.2s; }
.social-link:hover { background: var(--gray-700); }
.footer-column-title { font-weight: 600; margin-bottom: 16px; }
.footer-links { display: flex; flex-direction: column; gap: 8px; }
.footer-link { color: var(--gray-400); font-size: 14px; transition: color 0.2s; }
.footer-link:hover { color: #fff; }
.footer-bottom {
    margin-top: 48px; padding-top: 32px; border-top: 1px solid var(--gray-800);
    display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px;
}
.footer-copyright { color: var(--gray-400); font-size: 14px; }
.footer-legal { display: flex; gap: 24px; }

@media (max-width: 1023px) {
    .footer-grid { grid-template-columns: repeat(2, 1fr); }
    .hero-title { font-size: 40px; }
}

/* Entrance transitions */
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes slide-up { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
.fade-in { animation: fade-in 0.6s ease-out both; }
.slide-up { animation: slide-up 0.6s ease-out both; }

@media (prefers-reduced-motion: reduce) {
    .fade-in, .slide-up { animation: none; }
    html { scroll-behavior: auto; }
}
"#;
