//! Command registry tests

use libcli::argument::Argument;
use libcli::error::Error;
use libcli::registry::*;
use libcli::sink::Sink;

fn noop(_args: &[Argument<'_>], _out: &mut dyn Sink) -> HandlerResult {
    Ok(())
}

static FIRST: Command<'static> = Command::new("first", "first command", &noop);
static SECOND: Command<'static> = Command::new("second", "second command", &noop);
static THIRD: Command<'static> = Command::new("third", "third command", &noop);

fn names<'a, const C: usize>(registry: &Registry<'a, C>) -> Vec<&'a str> {
    registry.iter().map(|command| command.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_appends_in_order() {
        let mut registry: Registry<'_> = Registry::new();
        assert!(registry.is_empty());

        registry.register(&FIRST).unwrap();
        registry.register(&SECOND).unwrap();
        registry.register(&THIRD).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(names(&registry), ["first", "second", "third"]);
    }

    #[test]
    fn test_unregister_middle_keeps_order() {
        let mut registry: Registry<'_> = Registry::new();
        registry.register(&FIRST).unwrap();
        registry.register(&SECOND).unwrap();
        registry.register(&THIRD).unwrap();

        registry.unregister(&SECOND).unwrap();
        assert_eq!(names(&registry), ["first", "third"]);
    }

    #[test]
    fn test_unregister_root_and_sole_entry() {
        let mut registry: Registry<'_> = Registry::new();
        registry.register(&FIRST).unwrap();
        registry.register(&SECOND).unwrap();

        registry.unregister(&FIRST).unwrap();
        assert_eq!(names(&registry), ["second"]);

        registry.unregister(&SECOND).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_missing_fails_fast() {
        let mut registry: Registry<'_> = Registry::new();
        assert_eq!(registry.unregister(&FIRST), Err(Error::NotRegistered));

        registry.register(&FIRST).unwrap();
        registry.register(&SECOND).unwrap();
        assert_eq!(registry.unregister(&THIRD), Err(Error::NotRegistered));
        assert_eq!(names(&registry), ["first", "second"]);
    }

    #[test]
    fn test_reregister_after_removal() {
        let mut registry: Registry<'_> = Registry::new();
        registry.register(&FIRST).unwrap();
        registry.register(&SECOND).unwrap();
        registry.unregister(&FIRST).unwrap();
        registry.register(&FIRST).unwrap();

        assert_eq!(names(&registry), ["second", "first"]);
    }

    #[test]
    fn test_register_same_descriptor_twice() {
        let mut registry: Registry<'_> = Registry::new();
        registry.register(&FIRST).unwrap();
        assert_eq!(registry.register(&FIRST), Err(Error::AlreadyRegistered));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        static DUPLICATE: Command<'static> = Command::new("first", "shadowed", &noop);

        let mut registry: Registry<'_> = Registry::new();
        registry.register(&FIRST).unwrap();
        registry.register(&DUPLICATE).unwrap();

        assert_eq!(registry.len(), 2);
        let found = registry.find(b"first", MatchMode::Exact).unwrap();
        assert_eq!(found.help, "first command");
    }

    #[test]
    fn test_register_empty_name() {
        static NAMELESS: Command<'static> = Command::new("", "no name", &noop);

        let mut registry: Registry<'_> = Registry::new();
        assert_eq!(registry.register(&NAMELESS), Err(Error::InvalidName));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_overflow() {
        let mut registry: Registry<'_, 2> = Registry::new();
        registry.register(&FIRST).unwrap();
        registry.register(&SECOND).unwrap();
        assert_eq!(registry.register(&THIRD), Err(Error::RegistryFull));
    }

    #[test]
    fn test_register_all() {
        static TABLE: [Command<'static>; 2] = [
            Command::new("ping", "prints a pong!", &noop),
            Command::new("pingpong", "longer name", &noop),
        ];

        let mut registry: Registry<'_> = Registry::new();
        registry.register_all(&TABLE).unwrap();
        assert_eq!(names(&registry), ["ping", "pingpong"]);
    }

    #[test]
    fn test_prefix_and_exact_matching() {
        static PING: Command<'static> = Command::new("ping", "short", &noop);
        static PINGPONG: Command<'static> = Command::new("pingpong", "long", &noop);

        let mut registry: Registry<'_> = Registry::new();
        registry.register(&PING).unwrap();
        registry.register(&PINGPONG).unwrap();

        // Registered first, so `ping` wins for its own name
        assert_eq!(registry.find(b"ping", MatchMode::Prefix).unwrap().name, "ping");
        // Legacy prefix matching: `pingpong` also selects the shorter `ping`
        assert_eq!(registry.find(b"pingpong", MatchMode::Prefix).unwrap().name, "ping");
        assert_eq!(registry.find(b"pingpong", MatchMode::Exact).unwrap().name, "pingpong");
        // A token shorter than the call name never matches
        assert!(registry.find(b"pin", MatchMode::Prefix).is_none());
        assert!(registry.find(b"pingp", MatchMode::Exact).is_none());
    }

    #[test]
    fn test_match_mode_default_is_prefix() {
        assert_eq!(MatchMode::default(), MatchMode::Prefix);
        assert!(MatchMode::Prefix.matches(b"helpme", b"help"));
        assert!(!MatchMode::Exact.matches(b"helpme", b"help"));
    }

    #[test]
    fn test_contains_is_by_identity() {
        static LOOKALIKE: Command<'static> = Command::new("first", "first command", &noop);

        let mut registry: Registry<'_> = Registry::new();
        registry.register(&FIRST).unwrap();
        assert!(registry.contains(&FIRST));
        assert!(!registry.contains(&LOOKALIKE));
    }

    #[test]
    fn test_local_descriptors() {
        fn echo(args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
            for arg in args {
                out.write(arg.as_bytes());
            }
            Ok(())
        }
        // Descriptor on the stack, registry borrows it
        let command = Command::new("echo", "echo arguments", &echo);

        let mut registry: Registry<'_, 4> = Registry::new();
        registry.register(&command).unwrap();

        let mut out = heapless::Vec::<u8, 16>::new();
        let found = registry.find(b"echo", MatchMode::Exact).unwrap();
        found
            .handler
            .call(&[Argument::new(b"a"), Argument::new(b"b")], &mut out)
            .unwrap();
        assert_eq!(&out[..], b"ab");
    }
}
