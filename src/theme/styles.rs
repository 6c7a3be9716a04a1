//! Global CSS styles for the zaffa invitation.
//!
//! Warm paper-and-gold wedding aesthetic. One stylesheet, injected once
//! from the App root.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --ivory: #faf7f2;
  --cream: #f3ede2;
  --champagne: #e9dcc9;

  /* NIGHT (Intro overlay) */
  --night: #0b0a09;

  /* GOLD (Ornament, Titles, Buttons) */
  --gold: #b08d57;
  --gold-deep: #8a6c3f;
  --gold-glow: rgba(176, 141, 87, 0.35);

  /* ROSE (Accents) */
  --rose: #b76e79;

  /* INK (Text) */
  --ink: #2f2a26;
  --ink-soft: rgba(47, 42, 38, 0.72);
  --ink-faint: rgba(47, 42, 38, 0.5);

  /* SEMANTIC */
  --error: #a33a3a;

  /* Typography */
  --font-serif: 'Playfair Display', 'Amiri', Georgia, serif;
  --font-sans: 'Segoe UI', 'Noto Sans Arabic', 'Helvetica Neue', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 1.2s cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  background: var(--ivory);
  color: var(--ink);
  line-height: 1.7;
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
}

input {
  font-family: inherit;
}

/* === Typography === */
.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 400;
  color: var(--gold-deep);
  text-align: center;
  letter-spacing: 0.04em;
  margin-bottom: 0.5rem;
}

.section-title::after {
  content: '';
  display: block;
  width: 3.5rem;
  height: 1px;
  background: var(--gold);
  margin: 0.75rem auto 0;
}

.section-subtitle {
  font-size: var(--text-base);
  color: var(--ink-soft);
  text-align: center;
  margin-bottom: 2rem;
}

/* === Language Toggle === */
.language-toggle {
  position: fixed;
  top: 1rem;
  inset-inline-end: 1rem;
  z-index: 900;
  padding: 0.4rem 1.1rem;
  border: 1px solid var(--gold);
  border-radius: 999px;
  background: rgba(250, 247, 242, 0.85);
  color: var(--gold-deep);
  font-size: var(--text-sm);
  letter-spacing: 0.03em;
  backdrop-filter: blur(6px);
  transition: all var(--transition-fast);
}

.language-toggle:hover {
  background: var(--gold);
  color: var(--ivory);
}

/* === Intro Overlay === */
.intro-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  background: var(--night);
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
}

.intro-video {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.intro-loading {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  color: var(--champagne);
  background: var(--night);
}

.intro-loading-label {
  font-size: var(--text-sm);
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

.intro-skip-hint {
  position: absolute;
  bottom: 2rem;
  left: 0;
  right: 0;
  text-align: center;
  color: rgba(243, 237, 226, 0.75);
  font-size: var(--text-sm);
  letter-spacing: 0.12em;
  animation: pulse 2.4s ease-in-out infinite;
  pointer-events: none;
}

/* === Spinner === */
.loading-spinner {
  width: 2.25rem;
  height: 2.25rem;
  border: 2px solid var(--gold-glow);
  border-top-color: var(--gold);
  border-radius: 50%;
  animation: spin 0.9s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes pulse {
  0%, 100% { opacity: 0.45; }
  50% { opacity: 1; }
}

/* === Page Shell === */
.invitation {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.invitation section {
  padding: 4rem 1.5rem;
}

/* === Hero === */
.hero-section {
  position: relative;
  height: 100vh;
  padding: 0;
  overflow: hidden;
  background: var(--night);
  opacity: 0;
}

.hero-section.hero-revealed {
  opacity: 1;
  transition: opacity var(--transition-reveal);
}

.hero-media {
  position: absolute;
  inset: 0;
}

.hero-video {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-loading {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: var(--night);
  color: var(--champagne);
}

.hero-loading-label {
  font-size: var(--text-sm);
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

.hero-manual-hint {
  position: absolute;
  top: 1.25rem;
  left: 50%;
  transform: translateX(-50%);
  padding: 0.35rem 1rem;
  border-radius: 999px;
  background: rgba(11, 10, 9, 0.7);
  color: var(--champagne);
  font-size: var(--text-xs);
  letter-spacing: 0.08em;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: flex-end;
  padding-bottom: 7rem;
  background: linear-gradient(to top, rgba(11, 10, 9, 0.65), transparent 55%);
  color: var(--ivory);
  text-align: center;
  pointer-events: none;
}

.hero-names {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  letter-spacing: 0.06em;
  text-shadow: 0 2px 18px rgba(11, 10, 9, 0.6);
}

.hero-date {
  margin-top: 0.5rem;
  font-size: var(--text-lg);
  color: var(--champagne);
  letter-spacing: 0.14em;
}

.scroll-hint {
  position: absolute;
  bottom: 1.75rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.15rem;
  border: none;
  background: none;
  color: var(--champagne);
  font-size: var(--text-sm);
  letter-spacing: 0.14em;
}

.scroll-hint-arrow {
  animation: bob 1.6s ease-in-out infinite;
}

@keyframes bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(0.35rem); }
}

/* === Countdown === */
.countdown-section {
  background: var(--cream);
}

.countdown {
  display: flex;
  justify-content: center;
  gap: 1rem;
  flex-wrap: wrap;
}

.countdown-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-width: 5.25rem;
  padding: 1.1rem 0.75rem;
  background: var(--ivory);
  border: 1px solid var(--champagne);
  border-radius: 0.75rem;
  box-shadow: 0 6px 20px rgba(47, 42, 38, 0.06);
}

.countdown-value {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--gold-deep);
  font-variant-numeric: tabular-nums;
}

.countdown-label {
  font-size: var(--text-xs);
  color: var(--ink-faint);
  letter-spacing: 0.14em;
  text-transform: uppercase;
}

/* === Venue === */
.venue-name {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  text-align: center;
  color: var(--ink);
  margin-bottom: 1.75rem;
}

.event-facts {
  display: flex;
  justify-content: center;
  gap: 2.5rem;
  flex-wrap: wrap;
  margin-bottom: 1.25rem;
}

.event-fact {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.15rem;
}

.event-fact-label {
  font-size: var(--text-xs);
  color: var(--ink-faint);
  letter-spacing: 0.14em;
  text-transform: uppercase;
}

.event-fact-value {
  font-size: var(--text-base);
  color: var(--ink);
}

.reception-note {
  text-align: center;
  color: var(--ink-soft);
  font-size: var(--text-sm);
  margin-bottom: 2.25rem;
}

/* === Venue Map === */
.venue-map {
  max-width: 32rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.venue-map-frame {
  position: relative;
  display: block;
  aspect-ratio: 16 / 10;
  border-radius: 0.9rem;
  overflow: hidden;
  border: 1px solid var(--champagne);
  text-decoration: none;
  box-shadow: 0 10px 30px rgba(47, 42, 38, 0.1);
  transition: transform var(--transition-normal);
}

.venue-map-frame:hover {
  transform: scale(1.015);
}

.venue-map-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.venue-map-veil {
  position: absolute;
  inset: 0;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  background: var(--cream);
  color: var(--ink-soft);
  font-size: var(--text-sm);
}

.venue-map-caption {
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  padding: 0.5rem;
  text-align: center;
  background: rgba(11, 10, 9, 0.55);
  color: var(--ivory);
  font-size: var(--text-xs);
  letter-spacing: 0.08em;
}

.venue-directions {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.6rem;
  text-align: center;
}

.venue-qr {
  width: 9.5rem;
  height: 9.5rem;
  padding: 0.5rem;
  background: var(--ivory);
  border: 1px solid var(--champagne);
  border-radius: 0.6rem;
}

.venue-directions-hint {
  color: var(--ink-soft);
  font-size: var(--text-sm);
}

.venue-maps-link {
  color: var(--gold-deep);
  font-size: var(--text-sm);
  letter-spacing: 0.02em;
}

.venue-copy-button {
  padding: 0.45rem 1.4rem;
  border: 1px solid var(--gold);
  border-radius: 999px;
  background: none;
  color: var(--gold-deep);
  font-size: var(--text-sm);
  transition: all var(--transition-fast);
}

.venue-copy-button:hover {
  background: var(--gold);
  color: var(--ivory);
}

.venue-address {
  color: var(--ink-faint);
  font-size: var(--text-sm);
}

/* === Handwritten Message === */
.handwritten-message {
  padding: 4rem 1.5rem;
  background: var(--cream);
}

.handwritten-body {
  max-width: 34rem;
  margin: 2rem auto 0;
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  line-height: 2;
  color: var(--ink);
  text-align: center;
}

.handwritten-body p {
  margin-bottom: 1.1rem;
}

.handwritten-body em {
  color: var(--rose);
}

.handwritten-body strong {
  color: var(--gold-deep);
  font-weight: 600;
  letter-spacing: 0.04em;
}

/* === RSVP === */
.rsvp-section {
  max-width: 26rem;
  margin: 0 auto;
  width: 100%;
}

.rsvp-prompt {
  text-align: center;
  color: var(--ink-soft);
  margin: 1.25rem 0 1.75rem;
}

.rsvp-thanks {
  margin-top: 1.75rem;
  padding: 1.25rem;
  text-align: center;
  background: var(--cream);
  border: 1px solid var(--champagne);
  border-radius: 0.75rem;
  color: var(--gold-deep);
  font-family: var(--font-serif);
  font-size: var(--text-lg);
}

.rsvp-name {
  width: 100%;
  padding: 0.7rem 1rem;
  border: 1px solid var(--champagne);
  border-radius: 0.6rem;
  background: var(--ivory);
  color: var(--ink);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast);
}

.rsvp-name:focus {
  outline: none;
  border-color: var(--gold);
}

.rsvp-name-missing {
  border-color: var(--error);
}

.rsvp-error {
  margin-top: 0.4rem;
  color: var(--error);
  font-size: var(--text-sm);
}

.rsvp-choices {
  display: flex;
  gap: 0.75rem;
  margin: 1.1rem 0;
}

.rsvp-choice {
  flex: 1;
  padding: 0.65rem 0.5rem;
  border: 1px solid var(--champagne);
  border-radius: 0.6rem;
  background: var(--ivory);
  color: var(--ink-soft);
  font-size: var(--text-sm);
  transition: all var(--transition-fast);
}

.rsvp-choice-active {
  border-color: var(--gold);
  background: var(--cream);
  color: var(--gold-deep);
}

.rsvp-guests {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.1rem;
}

.rsvp-guests-label {
  color: var(--ink-soft);
  font-size: var(--text-sm);
}

.rsvp-guests-input {
  width: 5rem;
  padding: 0.45rem 0.6rem;
  border: 1px solid var(--champagne);
  border-radius: 0.5rem;
  background: var(--ivory);
  color: var(--ink);
  text-align: center;
}

.rsvp-submit {
  width: 100%;
  padding: 0.8rem;
  border: none;
  border-radius: 999px;
  background: var(--gold);
  color: var(--ivory);
  font-size: var(--text-base);
  letter-spacing: 0.06em;
  transition: background var(--transition-fast);
}

.rsvp-submit:hover {
  background: var(--gold-deep);
}

/* === Photo Wall === */
.photo-section {
  padding: 4rem 1.5rem;
  background: var(--cream);
  text-align: center;
}

.photo-prompt {
  color: var(--ink-soft);
  margin: 1.25rem 0 1.75rem;
}

.photo-error {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  max-width: 26rem;
  margin: 0 auto 1.25rem;
  padding: 0.6rem 1rem;
  border: 1px solid var(--error);
  border-radius: 0.6rem;
  color: var(--error);
  font-size: var(--text-sm);
  text-align: start;
}

.error-dismiss {
  border: none;
  background: none;
  color: var(--error);
  font-size: var(--text-base);
}

.photo-empty {
  color: var(--ink-faint);
  font-size: var(--text-sm);
  margin-bottom: 1.5rem;
}

.photo-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(9rem, 1fr));
  gap: 0.75rem;
  max-width: 40rem;
  margin: 0 auto 1.5rem;
}

.photo-tile {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 0.6rem;
  border: 1px solid var(--champagne);
  background: var(--ivory);
}

.photo-add-button {
  padding: 0.7rem 2rem;
  border: 1px solid var(--gold);
  border-radius: 999px;
  background: none;
  color: var(--gold-deep);
  font-size: var(--text-sm);
  letter-spacing: 0.05em;
  transition: all var(--transition-fast);
}

.photo-add-button:hover:not(:disabled) {
  background: var(--gold);
  color: var(--ivory);
}

.photo-add-button:disabled {
  opacity: 0.55;
  cursor: wait;
}

/* === Reminder Card === */
.reminder-card {
  max-width: 28rem;
  margin: 0 auto;
  text-align: center;
}

.reminder-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--rose);
  margin-bottom: 0.6rem;
}

.reminder-body {
  padding: 1.1rem 1.4rem;
  background: var(--ivory);
  border: 1px dashed var(--rose);
  border-radius: 0.75rem;
  color: var(--ink-soft);
}

/* === Footer === */
.invitation-footer {
  padding: 3.5rem 1.5rem 4.5rem;
  background: var(--night);
  color: var(--champagne);
  text-align: center;
}

.footer-names {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  letter-spacing: 0.08em;
  margin-bottom: 0.5rem;
}

.footer-message {
  color: rgba(243, 237, 226, 0.75);
  font-size: var(--text-sm);
  margin-bottom: 0.75rem;
}

.footer-date {
  color: var(--gold);
  font-size: var(--text-sm);
  letter-spacing: 0.18em;
}

/* === RTL Adjustments === */
[dir="rtl"] .invitation {
  letter-spacing: 0;
}

[dir="rtl"] .section-title,
[dir="rtl"] .hero-names,
[dir="rtl"] .countdown-label,
[dir="rtl"] .event-fact-label {
  letter-spacing: 0;
}

[dir="rtl"] .photo-error {
  text-align: right;
}

/* === Responsive === */
@media (max-width: 640px) {
  .invitation section {
    padding: 3rem 1rem;
  }

  .hero-names {
    font-size: var(--text-2xl);
  }

  .countdown {
    gap: 0.5rem;
  }

  .countdown-tile {
    min-width: 4.25rem;
    padding: 0.8rem 0.5rem;
  }

  .event-facts {
    gap: 1.25rem;
  }
}
"#;
