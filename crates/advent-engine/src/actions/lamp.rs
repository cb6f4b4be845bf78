//! The brass lantern.

use advent_core::{LampState, ObjectId};

use super::{ActionContext, Flow};
use crate::error::EngineResult;
use crate::verb::Verb;

pub(super) fn on(ctx: &mut ActionContext<'_>) -> EngineResult<Flow> {
    if !ctx.world.here(ObjectId::LAMP) {
        return ctx.default_reply(Verb::On);
    }
    if ctx.world.limit < 0 {
        return ctx.reply(184);
    }
    ctx.world.set_state(LampState::On);
    ctx.out.message(39);
    if ctx.world.was_dark {
        ctx.world.was_dark = false;
        return Ok(Flow::Redescribe);
    }
    Ok(Flow::Continue)
}

pub(super) fn off(ctx: &mut ActionContext<'_>) -> EngineResult<Flow> {
    if !ctx.world.here(ObjectId::LAMP) {
        return ctx.default_reply(Verb::Off);
    }
    ctx.world.set_state(LampState::Off);
    ctx.reply(40)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::Bench;

    #[test]
    fn lamp_must_be_here() {
        let mut bench = Bench::at(1);
        bench.run("on", "", on);
        bench.run("off", "", off);
        assert_eq!(bench.messages(), [38, 38]);
    }

    #[test]
    fn lighting_in_the_dark_redescribes() {
        let mut bench = Bench::at(3);
        assert_eq!(bench.run("on", "", on), Flow::Continue);
        assert_eq!(bench.world.state::<LampState>(), LampState::On);

        bench.world.was_dark = true;
        assert_eq!(bench.run("on", "", on), Flow::Redescribe);
        assert!(!bench.world.was_dark);

        bench.run("off", "", off);
        assert_eq!(bench.messages(), [39, 39, 40]);
        assert_eq!(bench.world.state::<LampState>(), LampState::Off);
    }

    #[test]
    fn dead_lamp_stays_dark() {
        let mut bench = Bench::at(3);
        bench.world.limit = -1;
        bench.run("on", "", on);
        assert_eq!(bench.messages(), [184]);
        assert_eq!(bench.world.state::<LampState>(), LampState::Off);
    }
}
