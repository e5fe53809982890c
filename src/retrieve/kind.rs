//! Module kind classification from capability probes.

use crate::metadata::ModuleCapabilities;
use crate::types::ModuleKind;

/// Ordered, first-match-wins predicate chain. Pure function of the probes.
pub fn module_kind(capabilities: &ModuleCapabilities) -> ModuleKind {
    if capabilities.defines_exception_struct {
        ModuleKind::Exception
    } else if capabilities.is_protocol {
        ModuleKind::Protocol
    } else if capabilities.is_protocol_impl {
        ModuleKind::Impl
    } else if capabilities.has_behaviour_info {
        ModuleKind::Behaviour
    } else {
        ModuleKind::Module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_module() {
        assert_eq!(module_kind(&ModuleCapabilities::default()), ModuleKind::Module);
    }

    #[test]
    fn test_each_capability() {
        let caps = ModuleCapabilities {
            defines_exception_struct: true,
            ..Default::default()
        };
        assert_eq!(module_kind(&caps), ModuleKind::Exception);

        let caps = ModuleCapabilities {
            is_protocol: true,
            ..Default::default()
        };
        assert_eq!(module_kind(&caps), ModuleKind::Protocol);

        let caps = ModuleCapabilities {
            is_protocol_impl: true,
            ..Default::default()
        };
        assert_eq!(module_kind(&caps), ModuleKind::Impl);

        let caps = ModuleCapabilities {
            has_behaviour_info: true,
            ..Default::default()
        };
        assert_eq!(module_kind(&caps), ModuleKind::Behaviour);
    }

    #[test]
    fn test_exception_wins_over_behaviour() {
        // A module may satisfy several probes; the chain is ordered.
        let caps = ModuleCapabilities {
            defines_exception_struct: true,
            has_behaviour_info: true,
            ..Default::default()
        };
        assert_eq!(module_kind(&caps), ModuleKind::Exception);
    }
}
