//! Global CSS styles for Daily Goals.
//!
//! Light and dark palettes from the app's design tokens; the active
//! palette is selected by the `theme-light` / `theme-dark` class the
//! shell puts on the root element.

pub const GLOBAL_STYLES: &str = r#"
/* === Palettes === */
.theme-light {
  --primary: #0a7ea4;
  --background: #ffffff;
  --surface: #f5f5f5;
  --surface-raised: #f8f8f8;
  --text: #333333;
  --text-secondary: #666666;
  --text-muted: #888888;
  --border: #e0e0e0;
  --error: #f44336;
  --success: #4CAF50;
}

.theme-dark {
  --primary: #0a7ea4;
  --background: #121212;
  --surface: #1e1e1e;
  --surface-raised: #1e1e1e;
  --text: #ffffff;
  --text-secondary: #cccccc;
  --text-muted: #999999;
  --border: #333333;
  --error: #f44336;
  --success: #4CAF50;
}

/* === Shared Tokens === */
:root {
  --warning: #FF9800;
  --danger: #FF3B30;
  --form-error: #ff3b30;
  --welcome-bg: #f0f4f8;
  --tab-active: #007AFF;
  --tab-inactive: #8E8E93;

  --space-xs: 4px;
  --space-sm: 8px;
  --space-md: 16px;
  --space-lg: 24px;
  --space-xl: 32px;

  --radius-sm: 6px;
  --radius-md: 8px;
  --radius-lg: 12px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body, #main {
  height: 100%;
}

body {
  font-family: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;
  font-size: 16px;
}

.app-shell {
  height: 100%;
  overflow-y: auto;
  background: var(--background);
  color: var(--text);
}

button {
  font-family: inherit;
  cursor: pointer;
}

input, textarea {
  font-family: inherit;
}

a {
  color: var(--primary);
  text-decoration: none;
}

/* === Buttons === */
.btn-primary, .btn-edit, .btn-danger, .btn-cancel {
  border: none;
  border-radius: var(--radius-md);
  padding: 12px 20px;
  font-size: 16px;
  font-weight: bold;
  color: #fff;
}

.btn-primary {
  background: var(--primary);
}

.btn-edit {
  background: var(--success);
  border-radius: var(--radius-sm);
  padding: 8px 16px;
  font-size: 14px;
}

.btn-danger {
  background: var(--danger);
  border-radius: var(--radius-sm);
  padding: 8px 16px;
  font-size: 14px;
}

.btn-cancel {
  background: var(--surface);
  color: var(--text);
  border: 1px solid var(--border);
}

.btn-primary:disabled, .btn-edit:disabled, .btn-danger:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-block {
  display: block;
  width: 100%;
}

/* === Form Fields === */
.form-field {
  margin-bottom: 20px;
}

.input-label {
  display: block;
  font-size: 16px;
  font-weight: 600;
  margin-bottom: 8px;
  color: var(--text);
}

.input-field {
  width: 100%;
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  padding: 12px;
  font-size: 16px;
  color: var(--text);
}

.input-field::placeholder {
  color: #999;
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
}

.input-field.input-error {
  border-color: var(--form-error);
}

.textarea {
  resize: vertical;
}

.field-error {
  color: var(--form-error);
  font-size: 14px;
  margin-top: 5px;
}

/* === Feedback === */
.spinner-wrap {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: var(--space-xl);
}

.spinner {
  width: 36px;
  height: 36px;
  border: 4px solid var(--border);
  border-top-color: var(--primary);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.spinner-label {
  margin-top: var(--space-md);
  color: var(--text-secondary);
  text-align: center;
}

.error-banner {
  color: var(--error);
  font-size: 14px;
  text-align: center;
  margin-bottom: var(--space-md);
}

.gate-loading {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
}

/* === Priority === */
.priority-badge {
  font-weight: bold;
}

.priority-badge.priority-high { color: var(--error); }
.priority-badge.priority-medium { color: var(--warning); }
.priority-badge.priority-low { color: var(--success); }

.priority-dot {
  display: inline-block;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  margin-right: 10px;
}

.priority-dot.priority-low { background: #4CAF50; }
.priority-dot.priority-medium { background: #FF9800; }
.priority-dot.priority-high { background: #f44336; }

.priority-selector {
  display: flex;
  align-items: center;
  width: 100%;
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  padding: 12px;
  font-size: 16px;
  color: var(--text);
}

.priority-selector.priority-low { border-color: #4CAF50; }
.priority-selector.priority-medium { border-color: #FF9800; }
.priority-selector.priority-high { border-color: #f44336; }

/* === Priority Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  z-index: 10;
}

.modal-content {
  background: var(--background);
  border-radius: var(--radius-lg) var(--radius-lg) 0 0;
  padding: var(--space-lg);
}

.modal-title {
  font-size: 18px;
  font-weight: bold;
  margin-bottom: var(--space-md);
  color: var(--text);
}

.priority-option {
  display: flex;
  align-items: center;
  width: 100%;
  border: 1px solid transparent;
  border-radius: var(--radius-md);
  padding: 12px;
  margin-bottom: var(--space-sm);
  font-size: 16px;
  color: var(--text);
  text-align: left;
}

.priority-option.priority-low { background: rgba(76, 175, 80, 0.13); }
.priority-option.priority-medium { background: rgba(255, 152, 0, 0.13); }
.priority-option.priority-high { background: rgba(244, 67, 54, 0.13); }

.priority-option.priority-low.selected {
  background: rgba(76, 175, 80, 0.25);
  border-color: #4CAF50;
}
.priority-option.priority-medium.selected {
  background: rgba(255, 152, 0, 0.25);
  border-color: #FF9800;
}
.priority-option.priority-high.selected {
  background: rgba(244, 67, 54, 0.25);
  border-color: #f44336;
}

/* === Confirm Dialog === */
.dialog-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 20;
}

.dialog-box {
  background: var(--background);
  border-radius: var(--radius-lg);
  padding: var(--space-lg);
  width: 85%;
  max-width: 340px;
}

.dialog-title {
  font-size: 18px;
  font-weight: bold;
  margin-bottom: var(--space-sm);
  color: var(--text);
}

.dialog-message {
  color: var(--text-secondary);
  margin-bottom: var(--space-lg);
}

.dialog-actions {
  display: flex;
  justify-content: flex-end;
  gap: var(--space-sm);
}

/* === Welcome === */
.welcome-screen {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  height: 100%;
  background: var(--welcome-bg);
  padding: var(--space-lg);
}

.welcome-title {
  font-size: 32px;
  font-weight: 800;
  letter-spacing: 1.5px;
  text-transform: uppercase;
  text-align: center;
  color: #0a7ea4;
  margin-bottom: 40px;
}

.welcome-actions {
  display: flex;
  flex-direction: column;
  gap: var(--space-md);
  width: 100%;
  max-width: 280px;
}

.welcome-actions .btn-primary {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-sm);
}

/* === Auth Forms === */
.auth-screen {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100%;
  background: var(--surface);
  padding: var(--space-lg) 0;
}

.auth-card {
  background: var(--background);
  border-radius: var(--radius-lg);
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
  padding: 20px;
  margin: 0 20px;
  width: 100%;
  max-width: 400px;
}

.auth-title {
  font-size: 28px;
  font-weight: bold;
  color: var(--text);
  text-align: center;
  margin-bottom: 30px;
}

.auth-submit {
  margin-top: 10px;
  padding: 16px;
  font-size: 18px;
}

.auth-link {
  display: block;
  margin-top: 20px;
  text-align: center;
  color: var(--primary);
  font-size: 16px;
  background: none;
  border: none;
}

/* === Tab Bar === */
.page-with-tabs {
  min-height: 100%;
  padding-bottom: 60px;
}

.tab-bar {
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  height: 60px;
  display: flex;
  background: var(--background);
  border-top: 1px solid var(--border);
  padding: 5px 0;
  z-index: 5;
}

.tab-item {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2px;
  color: var(--tab-inactive);
}

.tab-item.active {
  color: var(--tab-active);
}

.tab-icon {
  font-size: 20px;
  line-height: 1;
}

.tab-label {
  font-size: 12px;
  font-weight: 600;
}

/* === Home === */
.home-screen {
  padding: 40px 30px 16px;
  background: var(--background);
}

.home-screen .add-goal {
  width: 100%;
  margin-bottom: var(--space-md);
}

.goal-card {
  background: var(--surface-raised);
  border-radius: 10px;
  padding: var(--space-md);
  margin-bottom: 12px;
}

.goal-card-title {
  font-size: 18px;
  font-weight: bold;
  color: var(--text);
}

.goal-card-title:hover {
  color: var(--primary);
}

.goal-card-desc {
  font-size: 14px;
  color: var(--text-secondary);
  margin-top: 4px;
}

.goal-card-priority {
  font-size: 13px;
  color: var(--text-muted);
  margin-top: 6px;
}

.goal-card-deadline {
  color: var(--text);
  font-size: 14px;
  margin-top: 2px;
}

.goal-card-actions {
  display: flex;
  justify-content: space-between;
  margin-top: 12px;
}

/* === Goal Detail === */
.detail-screen {
  padding: var(--space-md);
  background: var(--background);
  min-height: 100%;
}

.detail-card {
  background: var(--surface);
  border-radius: var(--radius-lg);
  padding: 20px;
  margin-bottom: var(--space-md);
}

.detail-title {
  font-size: 24px;
  font-weight: bold;
  color: var(--text);
  text-align: center;
  margin-bottom: 20px;
}

.detail-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  background: rgba(0, 0, 0, 0.05);
  border-radius: var(--radius-md);
  padding: 8px 12px;
  margin-bottom: var(--space-md);
}

.detail-label {
  font-weight: 600;
  color: var(--text-secondary);
}

.detail-description-label {
  font-weight: 600;
  color: var(--text-secondary);
  margin-bottom: var(--space-sm);
}

.detail-description {
  color: var(--text);
  line-height: 1.6;
}

.detail-status {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100%;
  padding: var(--space-md);
}

.detail-error {
  color: var(--error);
  font-size: 18px;
}

.detail-missing {
  color: var(--text-secondary);
  font-size: 18px;
}

/* === Goal Form === */
.form-screen {
  padding: 40px 20px;
  background: var(--background);
  min-height: 100%;
}

.form-screen .form-submit {
  width: 100%;
  padding: 16px;
  font-size: 18px;
  margin-top: 10px;
}

.form-screen .form-cancel {
  width: 100%;
  margin-top: var(--space-sm);
}

/* === Settings === */
.settings-screen {
  padding: 60px 20px 0;
  background: var(--background);
}

.settings-header {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 12px;
  padding-bottom: 30px;
}

.settings-title {
  font-size: 28px;
  font-weight: bold;
  color: var(--text);
}

.settings-section {
  margin-bottom: var(--space-xl);
}

.section-title {
  font-size: 18px;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.5px;
  margin-bottom: var(--space-md);
  color: var(--text);
}

.setting-item {
  display: flex;
  align-items: center;
  justify-content: space-between;
  background: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-md);
  margin-bottom: var(--space-sm);
}

.setting-text {
  margin-right: var(--space-md);
}

.setting-label {
  font-weight: 600;
  color: var(--text);
}

.setting-desc {
  font-size: 14px;
  color: var(--text-secondary);
  margin-top: 2px;
}

.setting-enabled {
  background: none;
  border: none;
  color: var(--success);
  font-weight: 600;
  font-size: 16px;
}

.setting-row-button {
  width: 100%;
  background: transparent;
  border: none;
  text-align: left;
  font-size: 16px;
}

.setting-chevron {
  color: var(--text-secondary);
  font-size: 20px;
}

.theme-toggle {
  display: inline-flex;
  align-items: center;
  gap: var(--space-sm);
  background: none;
  border: 1px solid var(--primary);
  border-radius: var(--radius-md);
  padding: 8px 16px;
  color: var(--primary);
  font-weight: 500;
}

.version-text {
  color: var(--text-secondary);
}

/* === Not Found === */
.notfound-screen {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  height: 100%;
  background: #f8f9fa;
  padding: var(--space-lg);
}

.notfound-code {
  font-size: 72px;
  font-weight: bold;
  color: #dc3545;
}

.notfound-message {
  font-size: 24px;
  font-weight: 600;
  color: #212529;
  margin-top: var(--space-sm);
}

.notfound-subtext {
  font-size: 16px;
  color: #6c757d;
  text-align: center;
  margin-top: var(--space-sm);
  margin-bottom: var(--space-lg);
}

.notfound-home {
  background: #007bff;
  border: none;
  border-radius: var(--radius-sm);
  padding: 12px 24px;
  color: #fff;
  font-size: 16px;
  font-weight: 500;
}

/* === Offline Notice === */
.offline-screen {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  height: 100%;
  background: var(--background);
  padding: 20px;
}

.offline-title {
  font-size: 20px;
  font-weight: bold;
  color: var(--text);
  text-align: center;
  margin-bottom: 10px;
}

.offline-text {
  color: var(--text-secondary);
  text-align: center;
}
"#;
