use yew::prelude::*;

use super::code_block::CodeBlock;

const WALLPAPER_SERVICE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<wallpaper xmlns:android="http://schemas.android.com/apk/res/android"
    android:label="3D Web Wallpaper"
    android:thumbnail="@drawable/wallpaper_thumb"
    android:settingsActivity=".WallpaperSettingsActivity" />"#;

const MANIFEST_ENTRY: &str = r#"<service
    android:name=".LiveWallpaperService"
    android:enabled="true"
    android:permission="android.permission.BIND_WALLPAPER">
    <intent-filter>
        <action android:name="android.service.wallpaper.WallpaperService" />
    </intent-filter>
    <meta-data
        android:name="android.service.wallpaper"
        android:resource="@xml/wallpaper_service" />
</service>"#;

const SERVICE_JAVA: &str = r#"public class LiveWallpaperService extends WallpaperService {
    @Override
    public Engine onCreateEngine() {
        return new WallpaperEngine();
    }

    public class WallpaperEngine extends Engine {
        private WebView webView;
        private GestureDetector gestureDetector;
        private ScaleGestureDetector scaleGestureDetector;

        @Override
        public void onCreate(SurfaceHolder surfaceHolder) {
            super.onCreate(surfaceHolder);
            webView = new WebView(LiveWallpaperService.this);
            webView.setLayerType(WebView.LAYER_TYPE_HARDWARE, null);
            webView.getSettings().setJavaScriptEnabled(true);
            SharedPreferences prefs =
                PreferenceManager.getDefaultSharedPreferences(LiveWallpaperService.this);
            webView.loadUrl(prefs.getString("wallpaper_url", DEFAULT_URL));
        }

        @Override
        public void onTouchEvent(MotionEvent event) {
            gestureDetector.onTouchEvent(event);
            scaleGestureDetector.onTouchEvent(event);
        }

        @Override
        public void onVisibilityChanged(boolean visible) {
            if (visible) webView.onResume(); else webView.onPause();
        }
    }
}"#;

const GESTURE_BRIDGE_JAVA: &str = r#"class GestureListener extends GestureDetector.SimpleOnGestureListener {
    @Override
    public boolean onScroll(MotionEvent e1, MotionEvent e2,
                            float distanceX, float distanceY) {
        webView.evaluateJavascript(
            "window.wallpaperGesture('pan', { deltaX: " + distanceX +
            ", deltaY: " + distanceY + " })", null);
        return true;
    }
}

class ScaleListener extends ScaleGestureDetector.SimpleOnScaleGestureListener {
    @Override
    public boolean onScale(ScaleGestureDetector detector) {
        webView.evaluateJavascript(
            "window.wallpaperGesture('zoom', { scale: " +
            detector.getScaleFactor() + " })", null);
        return true;
    }
}"#;

#[derive(Properties, PartialEq, Clone)]
pub struct GuideViewProps {
    pub notify: Callback<String>,
}

/// Reference snippets for the native layer the demo simulates. Pure
/// content; each block copies to the clipboard.
#[function_component(GuideView)]
pub fn guide_view(props: &GuideViewProps) -> Html {
    let sections: [(&str, &str, &str); 4] = [
        (
            "Wallpaper service descriptor",
            "res/xml/wallpaper_service.xml declares the live wallpaper to the system picker.",
            WALLPAPER_SERVICE_XML,
        ),
        (
            "Manifest entry",
            "The service needs the BIND_WALLPAPER permission and the wallpaper intent filter.",
            MANIFEST_ENTRY,
        ),
        (
            "Wallpaper service",
            "A WallpaperService engine hosting a hardware-accelerated WebView pointed at the 3D site.",
            SERVICE_JAVA,
        ),
        (
            "Gesture bridge",
            "Gesture recognizers forward pan/zoom/rotate into the page via evaluateJavascript.",
            GESTURE_BRIDGE_JAVA,
        ),
    ];

    html! {
        <div style="max-width:760px; margin:24px auto; display:flex; flex-direction:column; gap:14px; padding:0 12px;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:14px;">
                <div style="font-size:16px; font-weight:600;">{"Native Implementation Guide"}</div>
                <div style="font-size:12px; opacity:0.7; margin-top:4px;">
                    {"What the Android side looks like when the concept ships for real. Nothing below runs in this demo."}
                </div>
            </div>
            { for sections.iter().map(|(title, blurb, code)| html! {
                <div style="background:rgba(13,17,23,0.6); border:1px solid #30363d; border-radius:10px; padding:14px; display:flex; flex-direction:column; gap:10px;">
                    <div style="font-size:13px; font-weight:600;">{ *title }</div>
                    <div style="font-size:12px; opacity:0.7;">{ *blurb }</div>
                    <CodeBlock code={*code} label={*title} notify={props.notify.clone()} />
                </div>
            }) }
        </div>
    }
}
