//! Static module catalogs passed to PyInstaller.
//!
//! Order matters: the generated command line is compared across runs, so
//! these lists are emitted exactly as declared.

/// Data directories bundled by default, as `source:destination`.
pub const DEFAULT_DATA: &[&str] = &[
    "models:models",
    "scripts:scripts",
    "src:src",
    "libs:libs",
    "assets:assets",
    "config:config",
];

/// Modules PyInstaller's import analysis misses.
pub const HIDDEN_IMPORTS: &[&str] = &[
    // Qt
    "PyQt5",
    "PyQt5.QtCore",
    "PyQt5.QtGui",
    "PyQt5.QtWidgets",
    "PyQt5.QtQml",
    "PyQt5.QtQuick",
    "PyQt5.QtQuickWidgets",
    "PyQt5.sip",
    "qasync",
    // audio
    "sounddevice",
    "pygame",
    "pygame.mixer",
    "opuslib",
    "webrtcvad",
    "soxr",
    // inference
    "sherpa_onnx",
    "onnxruntime",
    "numpy",
    "cv2",
    // network
    "aiohttp",
    "websockets",
    "paho.mqtt",
    "paho.mqtt.client",
    "requests",
    "cryptography",
    "cryptography.fernet",
    // misc
    "PIL",
    "PIL.Image",
    "pendulum",
    "mutagen",
    "bs4",
    "colorlog",
    "rich",
    "pynput",
    "pynput.keyboard",
    "pynput.mouse",
    "pyperclip",
    "pypinyin",
    "psutil",
    "packaging",
    "dateutil",
    "lunar_python",
    "brotli",
];

/// Appended to [`HIDDEN_IMPORTS`] when packaging on Windows.
pub const WINDOWS_HIDDEN_IMPORTS: &[&str] = &[
    "comtypes",
    "comtypes.client",
    "pycaw",
    "pycaw.pycaw",
    "win32api",
    "win32con",
    "win32gui",
    "win32process",
    "win32com",
    "win32com.client",
    "pythoncom",
    "pywintypes",
];

/// Modules kept out of the bundle.
pub const EXCLUDED_MODULES: &[&str] = &[
    "tkinter",
    "matplotlib",
    "scipy",
    "pandas",
    "IPython",
    "jupyter",
    "notebook",
];
