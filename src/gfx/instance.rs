use std::ffi::CStr;
use std::os::raw::c_char;

use anyhow::Context;
use ash::vk;

/// Instance-level extensions the shell always enables. The driver either
/// provides the surface capability or instance creation fails outright.
const REQUIRED_EXTENSIONS: [&CStr; 1] = [vk::KHR_SURFACE_NAME];

pub struct Instance {
    entry: ash::Entry,
    raw: ash::Instance,
}

impl Instance {
    /// Loads the Vulkan entry points, logs the supported instance extensions
    /// and creates the instance. Instance-level functions are resolved as
    /// part of creation and are unavailable before it.
    pub fn new() -> anyhow::Result<Self> {
        let entry =
            unsafe { ash::Entry::load() }.context("failed to load the Vulkan entry points")?;
        log::info!("Vulkan entry points loaded");

        let supported = unsafe { entry.enumerate_instance_extension_properties(None) }
            .context("failed to enumerate instance extensions")?;
        for properties in &supported {
            log::info!("supported instance extension: {}", extension_name(properties));
        }

        let extension_names: Vec<*const c_char> =
            REQUIRED_EXTENSIONS.iter().map(|name| name.as_ptr()).collect();
        let info = vk::InstanceCreateInfo::default().enabled_extension_names(&extension_names);
        let raw = unsafe { entry.create_instance(&info, None) }
            .context("failed to create the Vulkan instance")?;

        Ok(Self { entry, raw })
    }

    pub fn handle(&self) -> vk::Instance {
        self.raw.handle()
    }
}

fn extension_name(properties: &vk::ExtensionProperties) -> String {
    properties
        .extension_name_as_c_str()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| String::from("<unterminated extension name>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_extension_is_required() {
        assert_eq!(REQUIRED_EXTENSIONS, [vk::KHR_SURFACE_NAME]);
        assert_eq!(REQUIRED_EXTENSIONS[0].to_bytes(), b"VK_KHR_surface");
    }

    #[test]
    fn test_extension_name_decodes_fixed_array() {
        let mut properties = vk::ExtensionProperties::default();
        for (dst, src) in properties
            .extension_name
            .iter_mut()
            .zip(b"VK_KHR_surface\0")
        {
            *dst = *src as c_char;
        }
        assert_eq!(extension_name(&properties), "VK_KHR_surface");
    }

    #[test]
    fn test_extension_name_reports_unterminated_array() {
        let mut properties = vk::ExtensionProperties::default();
        properties.extension_name = [b'x' as c_char; vk::MAX_EXTENSION_NAME_SIZE];
        assert_eq!(extension_name(&properties), "<unterminated extension name>");
    }
}
