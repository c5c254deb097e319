//! Win32 window host
//!
//! A fixed-size window showing the canvas scaled by whole pixels. Key
//! presses arrive as WM_KEYDOWN on the window thread and are handed to the
//! controller directly; frames are blitted with StretchDIBits on WM_PAINT.

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::c_void;

use tiny_skia::Pixmap;
use tracing::{debug, info, warn};
use windows::Win32::Foundation::{GetLastError, HWND, LPARAM, LRESULT, RECT, WIN32_ERROR, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BeginPaint, COLORONCOLOR, DIB_RGB_COLORS, EndPaint, HDC,
    InvalidateRect, PAINTSTRUCT, SRCCOPY, SetStretchBltMode, StretchDIBits, UpdateWindow,
};
use windows::Win32::System::Diagnostics::Debug::MessageBeep;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::w;

use crate::app::{Audio, BingoController, Cue, Screen};
use crate::config::GameConfig;
use crate::input::HostInput;
use crate::platform::HostError;
use crate::ui::renderer::bgra_pixels;
use crate::ui::{Frame, FrameRenderer, SCREEN_HEIGHT, SCREEN_WIDTH, TextFont};

// Matches the Win32 ERROR_CLASS_ALREADY_EXISTS (1410) code.
const CLASS_ALREADY_EXISTS_ERR: WIN32_ERROR = WIN32_ERROR(1410);

/// Bit 30 of WM_KEYDOWN's lParam: the key was already down (auto-repeat)
const KEY_REPEAT_FLAG: isize = 1 << 30;

type WindowController = BingoController<WindowScreen, BeepAudio>;

/// Screen that keeps the latest canvas and asks the window to repaint
pub struct WindowScreen {
    renderer: FrameRenderer,
    canvas: Pixmap,
    hwnd: HWND,
}

impl WindowScreen {
    fn new(renderer: FrameRenderer, hwnd: HWND) -> Result<Self, HostError> {
        Ok(Self {
            renderer,
            canvas: FrameRenderer::canvas()?,
            hwnd,
        })
    }

    /// Blits the canvas over the whole client area
    unsafe fn paint(&self, hdc: HDC) {
        let mut client = RECT::default();
        if GetClientRect(self.hwnd, &mut client).is_err() {
            return;
        }

        let width = SCREEN_WIDTH as i32;
        let height = SCREEN_HEIGHT as i32;

        let mut bitmap_info = BITMAPINFO::default();
        bitmap_info.bmiHeader = BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            biHeight: -height, // top-down rows, same order as the pixmap
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        };

        let pixels = bgra_pixels(&self.canvas);

        SetStretchBltMode(hdc, COLORONCOLOR);
        let copied = StretchDIBits(
            hdc,
            0,
            0,
            client.right - client.left,
            client.bottom - client.top,
            0,
            0,
            width,
            height,
            Some(pixels.as_ptr() as *const c_void),
            &bitmap_info,
            DIB_RGB_COLORS,
            SRCCOPY,
        );

        if copied == 0 {
            warn!("StretchDIBits copied no scan lines");
        }
    }
}

impl Screen for WindowScreen {
    fn show(&mut self, frame: &Frame) {
        self.renderer.render_into(frame, &mut self.canvas);
        unsafe {
            InvalidateRect(self.hwnd, None, false);
        }
    }
}

/// Audio through the system notification sounds
#[derive(Debug, Default)]
pub struct BeepAudio;

impl Audio for BeepAudio {
    fn play(&mut self, cue: Cue) {
        let style = match cue {
            Cue::Draw => MB_OK,
            Cue::Exhausted => MB_ICONASTERISK,
        };

        if let Err(e) = unsafe { MessageBeep(style) } {
            warn!("MessageBeep failed: {}", e);
        }
    }

    fn stop_all(&mut self) {}
}

/// Runs the game in a window until it is closed
pub fn run(game: &GameConfig, font: TextFont, scale: u32) -> Result<(), HostError> {
    let hwnd = unsafe { create_game_window(scale)? };

    let screen = match WindowScreen::new(FrameRenderer::new(font), hwnd) {
        Ok(screen) => screen,
        Err(e) => {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            return Err(e);
        }
    };

    let controller: Box<WindowController> = Box::new(BingoController::new(
        game,
        &mut rand::thread_rng(),
        screen,
        BeepAudio,
    ));
    let controller_ptr = Box::into_raw(controller);

    unsafe {
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, controller_ptr as isize);
        ShowWindow(hwnd, SW_SHOW);
        UpdateWindow(hwnd);
    }

    info!("Window host started at scale {}", scale);
    run_message_loop();

    // WM_DESTROY has detached the controller from the window by now
    drop(unsafe { Box::from_raw(controller_ptr) });
    Ok(())
}

unsafe fn create_game_window(scale: u32) -> Result<HWND, HostError> {
    let class_name = w!("BingoCallerWindow");
    let instance = GetModuleHandleW(None).map_err(|_| HostError::WindowClassRegistrationFailed)?;

    let wnd_class = WNDCLASSW {
        lpfnWndProc: Some(game_wnd_proc),
        hInstance: instance.into(),
        lpszClassName: class_name,
        hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
        ..Default::default()
    };

    if RegisterClassW(&wnd_class) == 0 {
        match GetLastError() {
            Err(err) if err.code() == CLASS_ALREADY_EXISTS_ERR.to_hresult() => {}
            _ => return Err(HostError::WindowClassRegistrationFailed),
        }
    }

    let style = WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX;
    let mut frame = RECT {
        left: 0,
        top: 0,
        right: (SCREEN_WIDTH * scale) as i32,
        bottom: (SCREEN_HEIGHT * scale) as i32,
    };
    if AdjustWindowRect(&mut frame, style, false).is_err() {
        debug!("AdjustWindowRect failed, using client size as window size");
    }

    let hwnd = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        class_name,
        w!("Bingo"),
        style,
        CW_USEDEFAULT,
        CW_USEDEFAULT,
        frame.right - frame.left,
        frame.bottom - frame.top,
        None,
        None,
        instance,
        None,
    );

    if hwnd.0 == 0 {
        return Err(HostError::WindowCreationFailed);
    }

    Ok(hwnd)
}

fn run_message_loop() {
    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

unsafe fn controller_mut(hwnd: HWND) -> Option<&'static mut WindowController> {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowController;
    if ptr.is_null() { None } else { Some(&mut *ptr) }
}

unsafe extern "system" fn game_wnd_proc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_KEYDOWN => {
            if lparam.0 & KEY_REPEAT_FLAG != 0 {
                return LRESULT(0);
            }

            match HostInput::from_vk_code(wparam.0 as u32) {
                Some(HostInput::Press(button)) => {
                    if let Some(controller) = controller_mut(hwnd) {
                        debug!("Button {:?}", button);
                        controller.handle_button(button);
                    }
                    LRESULT(0)
                }
                Some(HostInput::Quit) => {
                    info!("Quit requested");
                    let _ = DestroyWindow(hwnd);
                    LRESULT(0)
                }
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            }
        }
        WM_PAINT => {
            let mut ps = PAINTSTRUCT::default();
            let hdc = BeginPaint(hwnd, &mut ps);
            if let Some(controller) = controller_mut(hwnd) {
                controller.screen().paint(hdc);
            }
            EndPaint(hwnd, &ps);
            LRESULT(0)
        }
        // The canvas covers the whole client area
        WM_ERASEBKGND => LRESULT(1),
        WM_DESTROY => {
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            PostQuitMessage(0);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
