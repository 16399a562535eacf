pub mod app;
pub mod build_view;
pub mod code_block;
pub mod guide_view;
pub mod implementation_view;
pub mod instructions_modal;
pub mod native_webview;
pub mod perf_panel;
pub mod scene_settings_modal;
pub mod toast;
pub mod url_input;
pub mod wallpaper_scene;
pub mod wallpaper_service;
pub mod website_preview;
