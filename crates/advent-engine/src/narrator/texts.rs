//! Built-in game text.

/// Numbered messages.
pub(super) const MESSAGES: &[(u16, &str)] = &[
    (
        1,
        "Somewhere nearby is Colossal Cave, where others have found fortunes in \
         treasure and gold, though it is rumored that some who enter are never \
         seen again. Magic is said to work in the cave. I will be your eyes and \
         hands. Direct me with commands of 1 or 2 words. (Should you get stuck, \
         type \"help\" for some general hints. For information on how to end \
         your adventure, etc., type \"info\".)",
    ),
    (2, "A little dwarf with a big knife blocks your way."),
    (
        3,
        "A little dwarf just walked around a corner, saw you, threw a little axe \
         at you which missed, cursed, and ran away.",
    ),
    (4, "There is a threatening little dwarf in the room with you!"),
    (5, "One sharp nasty knife is thrown at you!"),
    (6, "None of them hit you!"),
    (7, "One of them gets you!"),
    (8, "A hollow voice says \"Plugh\"."),
    (9, "There is no way to go that direction."),
    (
        10,
        "I am unsure how you are facing. Use compass points or nearby objects.",
    ),
    (
        11,
        "I don't know in from out here. Use compass points or name something in \
         the general direction you want to go.",
    ),
    (12, "I don't know how to apply that word here."),
    (13, "I don't understand that!"),
    (14, "I'm game. Would you care to explain how?"),
    (
        15,
        "Sorry, but I am not allowed to give more detail. I will repeat the long \
         description of your location.",
    ),
    (
        16,
        "It is now pitch dark. If you proceed you will likely fall into a pit.",
    ),
    (22, "Do you really want to quit now?"),
    (23, "You fell into a pit and broke every bone in your body!"),
    (24, "You are already carrying it!"),
    (25, "You can't be serious!"),
    (
        26,
        "The bird was unafraid when you entered, but as you approach it becomes \
         disturbed and you cannot catch it.",
    ),
    (27, "You can catch the bird, but you cannot carry it."),
    (28, "There is nothing here with a lock!"),
    (29, "You aren't carrying it!"),
    (
        30,
        "The little bird attacks the green snake, and in an astounding flurry \
         drives the snake away.",
    ),
    (31, "You have no keys!"),
    (32, "It has no lock."),
    (33, "I don't know how to lock or unlock such a thing."),
    (34, "It was already locked."),
    (35, "The grate is now locked."),
    (36, "The grate is now unlocked."),
    (37, "It was already unlocked."),
    (38, "You have no source of light."),
    (39, "Your lamp is now on."),
    (40, "Your lamp is now off."),
    (
        41,
        "There is no way to get past the bear to unlock the chain, which is \
         probably just as well.",
    ),
    (42, "Nothing happens."),
    (43, "Where?"),
    (44, "There is nothing here to attack."),
    (45, "The little bird is now dead. Its body disappears."),
    (46, "Attacking the snake both doesn't work and is very dangerous."),
    (47, "You killed a little dwarf."),
    (48, "You attack a little dwarf, but he dodges out of the way."),
    (49, "With what? Your bare hands?"),
    (50, "Good try, but that is an old worn-out magic word."),
    (
        51,
        "I know of places, actions, and things. Most of my vocabulary describes \
         places and is used to move you there. To move, try words like forest, \
         building, downstream, enter, east, west, north, south, up, or down. I \
         know about a few special objects, like a black rod hidden in the cave. \
         These objects can be manipulated using some of the action words that I \
         know. Usually you will need to give both the object and action words \
         (in either order), but sometimes I can infer the object from the verb \
         alone. Some objects also imply verbs; in particular, \"inventory\" \
         implies \"take inventory\", which causes me to give you a list of what \
         you're carrying. The objects have side effects; for instance, the rod \
         scares the bird. Usually people having trouble moving just need to try \
         a few more words. Usually people trying unsuccessfully to manipulate an \
         object are attempting something beyond their (or my!) capabilities and \
         should try a completely different tack. To speed the game you can \
         sometimes move long distances with a single word. For example, \
         \"building\" usually gets you to the building from anywhere above \
         ground except when lost in the forest. Also, note that cave passages \
         turn a lot, and that leaving a room to the north does not guarantee \
         entering the next from the south. Good luck!",
    ),
    (52, "It misses!"),
    (53, "It gets you!"),
    (54, "OK"),
    (55, "You can't unlock the keys."),
    (
        57,
        "I don't know where the cave is, but hereabouts no stream can run on the \
         surface for long. I would try the stream.",
    ),
    (58, "I need more detailed instructions to do that."),
    (
        59,
        "I can only tell you what you see as you move about and manipulate \
         things. I cannot tell you where remote things are.",
    ),
    (60, "I don't know that word."),
    (61, "What?"),
    (
        64,
        "The trees of the forest are large hardwood oak and maple, with an \
         occasional grove of pine or spruce. There is quite a bit of \
         undergrowth, largely birch and ash saplings plus nondescript bushes of \
         various sorts. This time of year visibility is quite restricted by all \
         the leaves, but travel is quite easy if you detour around the spruce \
         and berry bushes.",
    ),
    (65, "Welcome to Adventure!! Would you like instructions?"),
    (
        66,
        "Digging without a shovel is quite impractical. Even with a shovel \
         progress is unlikely.",
    ),
    (67, "Blasting requires dynamite."),
    (68, "I'm as confused as you are."),
    (
        69,
        "Mist is a white vapor, usually water, seen from time to time in \
         caverns. It can be found anywhere but is frequently a sign of a deep \
         pit leading down to water.",
    ),
    (71, "I think I just lost my appetite."),
    (72, "Thank you, it was delicious!"),
    (
        73,
        "You have taken a drink from the stream. The water tastes strongly of \
         minerals, but is not unpleasant. It is extremely cold.",
    ),
    (74, "The bottle of water is now empty."),
    (
        75,
        "Rubbing the electric lamp is not particularly rewarding. Anyway, \
         nothing exciting happens.",
    ),
    (76, "Peculiar. Nothing unexpected happens."),
    (77, "Your bottle is empty and the ground is wet."),
    (78, "You can't pour that."),
    (80, "Which way?"),
    (
        81,
        "Oh dear, you seem to have gotten yourself killed. I might be able to \
         help you out, but I've never really done this before. Do you want me \
         to try to reincarnate you?",
    ),
    (
        82,
        "All right. But don't blame me if something goes wr......\n\
         --- POOF!! ---\n\
         You are engulfed in a cloud of orange smoke. Coughing and gasping, you \
         emerge from the smoke and find....",
    ),
    (
        83,
        "You clumsy oaf, you've done it again! I don't know how long I can keep \
         this up. Do you want me to try reincarnating you again?",
    ),
    (
        84,
        "Okay, now where did I put my orange smoke?.... >POOF!<\n\
         Everything disappears in a dense cloud of orange smoke.",
    ),
    (
        85,
        "Now you've really done it! I'm out of orange smoke! You don't expect me \
         to do a decent reincarnation without any orange smoke, do you?",
    ),
    (86, "Okay, if you're so smart, do it yourself! I'm leaving!"),
    (
        91,
        "Sorry, but I no longer seem to remember how it was you got here.",
    ),
    (
        92,
        "You can't carry anything more. You'll have to drop something first.",
    ),
    (93, "You can't go through a locked steel grate!"),
    (94, "I believe what you want is right here with you."),
    (95, "You don't fit through a two-inch slit!"),
    (
        96,
        "I respectfully suggest you go across the bridge instead of jumping.",
    ),
    (97, "There is no way across the fissure."),
    (98, "You're not carrying anything."),
    (99, "You are currently holding the following:"),
    (
        100,
        "It's not hungry (it's merely pinin' for the fjords). Besides, you have \
         no bird seed.",
    ),
    (101, "The snake has now devoured your bird."),
    (
        102,
        "There's nothing here it wants to eat (except perhaps you).",
    ),
    (
        103,
        "You fool, dwarves eat only coal! Now you've made him *really* mad!!",
    ),
    (104, "You have nothing in which to carry it."),
    (105, "Your bottle is already full."),
    (106, "There is nothing here with which to fill the bottle."),
    (107, "Your bottle is now full of water."),
    (108, "Your bottle is now full of oil."),
    (109, "You can't fill that."),
    (110, "Don't be ridiculous!"),
    (111, "The door is extremely rusty and refuses to open."),
    (
        112,
        "The plant indignantly shakes the oil off its leaves and asks, \
         \"Water?\"",
    ),
    (
        113,
        "The hinges are quite thoroughly rusted now and won't budge.",
    ),
    (
        114,
        "The oil has freed up the hinges so that the door will now move, \
         although it requires some effort.",
    ),
    (
        115,
        "The plant has exceptionally deep roots and cannot be pulled free.",
    ),
    (
        116,
        "The dwarves' knives vanish as they strike the walls of the cave.",
    ),
    (
        120,
        "I advise you to put down the clam before opening it. >STRAIN!<",
    ),
    (
        121,
        "I advise you to put down the oyster before opening it. >WRENCH!<",
    ),
    (
        122,
        "You don't have anything strong enough to open the clam.",
    ),
    (
        123,
        "You don't have anything strong enough to open the oyster.",
    ),
    (
        124,
        "A glistening pearl falls out of the clam and rolls away. Goodness, \
         this must really be an oyster. (I never was very good at identifying \
         bivalves.) Whatever it is, it has now snapped shut again.",
    ),
    (
        125,
        "The oyster creaks open, revealing nothing but oyster inside. It \
         promptly snaps shut again.",
    ),
    (
        127,
        "There are faint rustling noises from the darkness behind you.",
    ),
    (
        128,
        "Out from the shadows behind you pounces a bearded pirate! \"Har, har,\" \
         he chortles, \"I'll just take all this booty and hide it away with me \
         chest deep in the maze!\" He snatches your treasure and vanishes into \
         the gloom.",
    ),
    (
        129,
        "A sepulchral voice reverberating through the cave, says, \"Cave closing \
         soon. All adventurers exit immediately through main office.\"",
    ),
    (
        130,
        "A mysterious recorded voice groans into life and announces: \"This exit \
         is closed. Please leave via main office.\"",
    ),
    (
        131,
        "It looks as though you're dead. Well, seeing as how it's so close to \
         closing time anyway, I think we'll just call it a day.",
    ),
    (
        132,
        "The sepulchral voice intones, \"The cave is now closed.\" As the echoes \
         fade, there is a blinding flash of light (and a small puff of orange \
         smoke). . . . As your eyes refocus, you look around and find...",
    ),
    (
        133,
        "There is a loud explosion, and a twenty-foot hole appears in the far \
         wall, burying the dwarves in the rubble. You march through the hole \
         and find yourself in the main office, where a cheering band of \
         friendly elves carry the conquering adventurer off into the sunset.",
    ),
    (
        134,
        "There is a loud explosion, and a twenty-foot hole appears in the far \
         wall, burying the snakes in the rubble. A river of molten lava pours \
         in through the hole, destroying everything in its path, including \
         you!",
    ),
    (
        135,
        "There is a loud explosion, and you are suddenly splashed across the \
         walls of the room.",
    ),
    (
        136,
        "The resulting ruckus has awakened the dwarves. There are now several \
         threatening little dwarves in the room with you! Most of them throw \
         knives at you! All of them get you!",
    ),
    (137, "Oh, leave the poor unhappy bird alone."),
    (138, "I daresay whatever you want is around here somewhere."),
    (139, "Stop what?"),
    (140, "You can't get there from here."),
    (141, "You are being followed by a very large, tame bear."),
    (
        142,
        "If you want to end your adventure early, say \"quit\". To suspend your \
         adventure such that you can continue later, say \"suspend\" (or \
         \"pause\" or \"save\"). To see what hours the cave is normally open, \
         say \"hours\". To see how well you're doing, say \"score\". To get \
         full credit for a treasure, you must have left it safely in the \
         building, though you get partial credit just for locating it. You \
         lose points for getting killed, or for quitting, though the former \
         costs you more. There are also points based on how much (if any) of \
         the cave you've managed to explore; in particular, there is a large \
         bonus just for getting in (to distinguish the beginners from the rest \
         of the pack), and there are other ways to determine whether you've \
         been through some of the more harrowing sections. If you think you've \
         found all the treasures, just keep exploring for a while. If nothing \
         interesting happens, you haven't found them all yet. If something \
         interesting *does* happen, it means you're getting a bonus and have an \
         opportunity to garner many more points in the master's section.",
    ),
    (
        144,
        "There is nothing here with which to fill the vase.",
    ),
    (
        145,
        "The sudden change in temperature has delicately shattered the vase.",
    ),
    (146, "It is beyond your power to do that."),
    (147, "I don't know how."),
    (148, "It is too far up for you to reach."),
    (
        149,
        "You killed a little dwarf. The body vanishes in a cloud of greasy \
         black smoke.",
    ),
    (150, "The shell is very strong and is impervious to attack."),
    (
        151,
        "What's the matter, can't you read? Now you'd best start over.",
    ),
    (
        152,
        "The axe bounces harmlessly off the dragon's thick scales.",
    ),
    (
        154,
        "The little bird attacks the green dragon, and in an astounding flurry \
         gets burnt to a cinder. The ashes blow away.",
    ),
    (155, "On what?"),
    (
        157,
        "Trolls are close relatives with the rocks and have skin as tough as \
         that of a rhinoceros. The troll fends off your blows effortlessly.",
    ),
    (
        158,
        "The troll deftly catches the axe, examines it carefully, and tosses it \
         back, declaring, \"Good workmanship, but it's not valuable enough.\"",
    ),
    (
        159,
        "The troll catches your treasure and scurries away out of sight.",
    ),
    (
        163,
        "The bear lumbers toward the troll, who lets out a startled shriek and \
         scurries away. The bear soon gives up the pursuit and wanders back.",
    ),
    (
        164,
        "The axe misses and lands near the bear where you can't get at it.",
    ),
    (
        165,
        "With what? Your bare hands? Against *his* bear hands??",
    ),
    (
        166,
        "The bear is confused; he only wants to be your friend.",
    ),
    (
        167,
        "For crying out loud, the poor thing is already dead!",
    ),
    (
        168,
        "The bear eagerly wolfs down your food, after which he seems to calm \
         down considerably and even becomes rather friendly.",
    ),
    (169, "The bear is still chained to the wall."),
    (170, "The chain is still locked."),
    (171, "The chain is now unlocked."),
    (172, "The chain is now locked."),
    (
        173,
        "There is nothing here to which the chain can be locked.",
    ),
    (174, "There is nothing here to eat."),
    (
        182,
        "Gluttony is not one of the troll's vices. Avarice, however, is.",
    ),
    (
        183,
        "Your lamp is getting dim. You'd best start wrapping this up, unless \
         you can find some fresh batteries. I seem to recall there's a vending \
         machine in the maze. Bring some coins with you.",
    ),
    (184, "Your lamp has run out of power."),
    (
        185,
        "There's not much point in wandering around out here, and you can't \
         explore the cave without a lamp. So let's just call it a day.",
    ),
    (
        186,
        "There are faint rustling noises from the darkness behind you. As you \
         turn toward them, the beam of your lamp falls across a bearded pirate. \
         He is carrying a large chest. \"Shiver me timbers!\" he cries, \"I've \
         been spotted! I'd best hie meself off to the maze to hide me chest!\" \
         With that, he vanishes into the gloom.",
    ),
    (
        187,
        "Your lamp is getting dim. You'd best go back for those batteries.",
    ),
    (
        188,
        "Your lamp is getting dim. I'm taking the liberty of replacing the \
         batteries.",
    ),
    (
        189,
        "Your lamp is getting dim, and you're out of spare batteries. You'd \
         best start wrapping this up.",
    ),
    (
        190,
        "I'm afraid the magazine is written in dwarvish.",
    ),
    (
        191,
        "\"This is not the maze where the pirate leaves his treasure chest.\"",
    ),
    (
        192,
        "Hmmm, this looks like a clue, which means it'll cost you 10 points to \
         read it. Should I go ahead and read it anyway?",
    ),
    (
        193,
        "It says, \"There is something strange about this place, such that one \
         of the words I've always known now has a new effect.\"",
    ),
    (195, "I'm afraid I don't understand."),
    (
        196,
        "\"Congratulations on bringing light into the dark-room!\"",
    ),
    (
        197,
        "You strike the mirror a resounding blow, whereupon it shatters into a \
         myriad tiny fragments.",
    ),
    (
        198,
        "You have taken the vase and hurled it delicately to the ground.",
    ),
    (
        199,
        "You prod the nearest dwarf, who wakes up grumpily, takes one look at \
         you, curses, and grabs for his axe.",
    ),
];

/// Location descriptions as `(id, long, short)`. An empty short text falls
/// back to the long one.
pub(super) const LOCATIONS: &[(u8, &str, &str)] = &[
    (
        1,
        "You are standing at the end of a road before a small brick building. \
         Around you is a forest. A small stream flows out of the building and \
         down a gully.",
        "You're at end of road again.",
    ),
    (
        2,
        "You have walked up a hill, still in the forest. The road slopes back \
         down the other side of the hill. There is a building in the distance.",
        "You're at hill in road.",
    ),
    (
        3,
        "You are inside a building, a well house for a large spring.",
        "You're inside building.",
    ),
    (
        4,
        "You are in a valley in the forest beside a stream tumbling along a \
         rocky bed.",
        "You're in valley.",
    ),
    (
        5,
        "You are in open forest, with a deep valley to one side.",
        "You're in forest.",
    ),
    (
        6,
        "You are in open forest near both a valley and a road.",
        "You're in forest.",
    ),
    (
        7,
        "At your feet all the water of the stream splashes into a 2-inch slit \
         in the rock. Downstream the streambed is bare rock.",
        "You're at slit in streambed.",
    ),
    (
        8,
        "You are in a 20-foot depression floored with bare dirt. Set into the \
         dirt is a strong steel grate mounted in concrete. A dry streambed \
         leads into the depression.",
        "You're outside grate.",
    ),
    (
        9,
        "You are in a small chamber beneath a 3x3 steel grate to the surface. \
         A low crawl over cobbles leads inward to the west.",
        "You're below the grate.",
    ),
    (
        10,
        "You are crawling over cobbles in a low passage. There is a dim light \
         at the east end of the passage.",
        "You're in cobble crawl.",
    ),
    (
        11,
        "You are in a debris room filled with stuff washed in from the surface. \
         A low wide passage with cobbles becomes plugged with mud and debris \
         here, but an awkward canyon leads upward and west. A note on the wall \
         says \"Magic word XYZZY\".",
        "You're in debris room.",
    ),
    (12, "You are in an awkward sloping east/west canyon.", ""),
    (
        13,
        "You are in a splendid chamber thirty feet high. The walls are frozen \
         rivers of orange stone. An awkward canyon and a good passage exit from \
         east and west sides of the chamber.",
        "You're in bird chamber.",
    ),
    (
        14,
        "At your feet is a small pit breathing traces of white mist. An east \
         passage ends here except for a small crack leading on.",
        "You're at top of small pit.",
    ),
    (
        15,
        "You are at one end of a vast hall stretching forward out of sight to \
         the west. There are openings to either side. Nearby, a wide stone \
         staircase leads downward. The hall is filled with wisps of white mist \
         swaying to and fro almost as if alive. A cold wind blows up the \
         staircase. There is a passage at the top of a dome behind you.",
        "You're in Hall of Mists.",
    ),
    (16, "The crack is far too small for you to follow.", ""),
    (
        17,
        "You are on the east bank of a fissure slicing clear across the hall. \
         The mist is quite thick here, and the fissure is too wide to jump.",
        "You're on east bank of fissure.",
    ),
    (
        18,
        "This is a low room with a crude note on the wall. The note says, \"You \
         won't get it up the steps\".",
        "You're in nugget of gold room.",
    ),
    (
        19,
        "You are in the Hall of the Mountain King, with passages off in all \
         directions.",
        "You're in Hall of Mt King.",
    ),
    (
        20,
        "You are at the bottom of the pit with a broken neck.",
        "",
    ),
    (21, "You didn't make it.", ""),
    (22, "The dome is unclimbable.", ""),
    (
        27,
        "You are on the west side of the fissure in the Hall of Mists.",
        "You're on west bank of fissure.",
    ),
    (
        28,
        "You are in a low N/S passage at a hole in the floor. The hole goes \
         down to an E/W passage.",
        "You're in N/S passage.",
    ),
    (29, "You are in the south side chamber.", ""),
    (
        30,
        "You are in the west side chamber of the Hall of the Mountain King. A \
         passage continues west and up here.",
        "",
    ),
    (32, "You can't get by the snake.", ""),
    (
        33,
        "You are in a large room, with a passage to the south, a passage to the \
         west, and a wall of broken rock to the east. There is a large \"Y2\" \
         on a rock in the room's center.",
        "You're at \"Y2\".",
    ),
    (
        34,
        "You are in a jumble of rock, with cracks everywhere.",
        "",
    ),
    (
        35,
        "You're at a low window overlooking a huge pit, which extends up out of \
         sight. A floor is indistinctly visible over 50 feet below. Traces of \
         white mist cover the floor of the pit, becoming thicker to the right. \
         Marks in the dust around the window would seem to indicate that \
         someone has been here recently. Directly across the pit from you and \
         25 feet away there is a similar window looking into a lighted room. A \
         shadowy figure can be seen there peering back at you.",
        "You're at window on pit.",
    ),
    (
        36,
        "You are in a dirty broken passage. To the east is a crawl. To the west \
         is a large passage. Above you is a hole to another passage.",
        "You're in dirty passage.",
    ),
    (
        79,
        "The stream flows out through a pair of 1 foot diameter sewer pipes. It \
         would be advisable to use the exit.",
        "",
    ),
    (
        115,
        "You are at the northeast end of an immense room, even larger than the \
         Giant Room. It appears to be a repository for the \"Adventure\" \
         program. Massive torches far overhead bathe the room with smoky yellow \
         light. Scattered about you can be seen a pile of bottles (all of them \
         empty), a nursery of young beanstalks murmuring quietly, a bed of \
         oysters, a bundle of black rods with rusty stars on their ends, and a \
         collection of brass lanterns. Off to one side a great many dwarves are \
         sleeping on the floor, snoring loudly. A sign nearby reads: \"Do not \
         disturb the dwarves!\" An immense mirror is hanging against one wall, \
         and stretches to the other end of the room, where various other \
         sundry objects can be glimpsed dimly in the distance.",
        "You're at NE end.",
    ),
    (
        116,
        "You are at the southwest end of the repository. To one side is a pit \
         full of fierce green snakes. On the other side is a row of small \
         wicker cages, each of which contains a little sulking bird. In one \
         corner is a bundle of black rods with rusty marks on their ends. A \
         large number of velvet pillows are scattered about on the floor. A \
         vast mirror stretches off to the northeast. At your feet is a large \
         steel grate, next to which is a sign that reads, \"Treasure vault. \
         Keys in main office.\"",
        "You're at SW end.",
    ),
];

/// Object texts as `(object, state, text)`. State -1 is the inventory name.
pub(super) const OBJECTS: &[(u8, i8, &str)] = &[
    (1, -1, "Set of keys"),
    (1, 0, "There are some keys on the ground here."),
    (2, -1, "Brass lantern"),
    (2, 0, "There is a shiny brass lamp nearby."),
    (2, 1, "There is a lamp shining nearby."),
    (3, -1, "*Grate"),
    (3, 0, "The grate is locked."),
    (3, 1, "The grate is open."),
    (4, -1, "Wicker cage"),
    (4, 0, "There is a small wicker cage discarded nearby."),
    (5, -1, "Black rod"),
    (
        5,
        0,
        "A three foot black rod with a rusty star on an end lies nearby.",
    ),
    (6, -1, "Black rod"),
    (
        6,
        0,
        "A three foot black rod with a rusty mark on an end lies nearby.",
    ),
    (7, -1, "*Steps"),
    (7, 0, "Rough stone steps lead down the pit."),
    (7, 1, "Rough stone steps lead up the dome."),
    (8, -1, "Little bird in cage"),
    (8, 0, "A cheerful little bird is sitting here singing."),
    (8, 1, "There is a little bird in the cage."),
    (9, -1, "*Rusty door"),
    (9, 0, "The way north is barred by a massive, rusty, iron door."),
    (
        9,
        1,
        "The way north leads through a massive, rusty, iron door.",
    ),
    (10, -1, "Velvet pillow"),
    (10, 0, "A small velvet pillow lies on the floor."),
    (11, -1, "*Snake"),
    (11, 0, "A huge green fierce snake bars the way!"),
    (12, -1, "*Fissure"),
    (12, 1, "A crystal bridge now spans the fissure."),
    (12, 2, "The crystal bridge has vanished!"),
    (13, -1, "*Stone tablet"),
    (
        13,
        0,
        "A massive stone tablet imbedded in the wall reads: \"Congratulations \
         on bringing light into the dark-room!\"",
    ),
    (14, -1, "Giant clam >GRUNT!<"),
    (
        14,
        0,
        "There is an enormous clam here with its shell tightly closed.",
    ),
    (15, -1, "Giant oyster >GROAN!<"),
    (
        15,
        0,
        "There is an enormous oyster here with its shell tightly closed.",
    ),
    (
        15,
        1,
        "Interesting. There seems to be something written on the underside of \
         the oyster.",
    ),
    (16, -1, "\"Spelunker Today\""),
    (
        16,
        0,
        "There are a few recent issues of \"Spelunker Today\" magazine here.",
    ),
    (19, -1, "Tasty food"),
    (19, 0, "There is food here."),
    (20, -1, "Small bottle"),
    (20, 0, "There is a bottle of water here."),
    (20, 1, "There is an empty bottle here."),
    (20, 2, "There is a bottle of oil here."),
    (21, -1, "Water in the bottle"),
    (22, -1, "Oil in the bottle"),
    (23, -1, "*Mirror"),
    (24, -1, "*Plant"),
    (
        24,
        0,
        "There is a tiny little plant in the pit, murmuring \"Water, water, \
         ...\"",
    ),
    (
        24,
        1,
        "The plant spurts into furious growth for a few seconds.",
    ),
    (
        24,
        2,
        "There is a 12-foot-tall beanstalk stretching up out of the pit, \
         bellowing \"WATER!! WATER!!\"",
    ),
    (
        24,
        3,
        "The plant grows explosively, almost filling the bottom of the pit.",
    ),
    (
        24,
        4,
        "There is a gigantic beanstalk stretching all the way up to the hole.",
    ),
    (
        24,
        5,
        "You've over-watered the plant! It's shriveling up! It's, it's...",
    ),
    (25, -1, "*Phony plant"),
    (
        25,
        1,
        "The top of a 12-foot-tall beanstalk is poking out of the west pit.",
    ),
    (
        25,
        2,
        "There is a huge beanstalk growing out of the west pit up to the hole.",
    ),
    (26, -1, "*Stalactite"),
    (27, -1, "*Shadowy figure"),
    (
        27,
        0,
        "The shadowy figure seems to be trying to attract your attention.",
    ),
    (28, -1, "Dwarf's axe"),
    (28, 0, "There is a little axe here."),
    (28, 1, "There is a little axe lying beside the bear."),
    (29, -1, "*Cave drawings"),
    (31, -1, "*Dragon"),
    (31, 0, "A huge green fierce dragon bars the way!"),
    (
        31,
        1,
        "Congratulations! You have just vanquished a dragon with your bare \
         hands! (Unbelievable, isn't it?)",
    ),
    (
        31,
        2,
        "The body of a huge green dead dragon is lying off to one side.",
    ),
    (32, -1, "*Chasm"),
    (
        32,
        0,
        "A rickety wooden bridge extends across the chasm, vanishing into the \
         mist. A sign posted on the bridge reads, \"Stop! Pay troll!\"",
    ),
    (
        32,
        1,
        "The wreckage of a bridge (and a dead bear) can be seen at the bottom \
         of the chasm.",
    ),
    (33, -1, "*Troll"),
    (
        33,
        0,
        "A burly troll stands by the bridge and insists you throw him a \
         treasure before you may cross.",
    ),
    (
        33,
        1,
        "The troll steps out from beneath the bridge and blocks your way.",
    ),
    (34, -1, "*Phony troll"),
    (34, 0, "The troll is nowhere to be seen."),
    (
        35,
        0,
        "There is a ferocious cave bear eying you from the far end of the room!",
    ),
    (
        35,
        1,
        "There is a gentle cave bear sitting placidly in one corner.",
    ),
    (
        35,
        2,
        "There is a contented-looking bear wandering about nearby.",
    ),
    (36, -1, "*Message in second maze"),
    (
        36,
        0,
        "There is a message scrawled in the dust in a flowery script, reading: \
         \"This is not the maze where the pirate leaves his treasure chest.\"",
    ),
    (37, -1, "*Volcano and/or geyser"),
    (38, -1, "*Vending machine"),
    (
        38,
        0,
        "There is a massive vending machine here. The instructions on it read: \
         \"Drop coins here to receive fresh batteries.\"",
    ),
    (39, -1, "Batteries"),
    (39, 0, "There are fresh batteries here."),
    (
        39,
        1,
        "Some worn-out batteries have been discarded nearby.",
    ),
    (40, -1, "*Carpet and/or moss"),
    (50, -1, "Large gold nugget"),
    (50, 0, "There is a large sparkling nugget of gold here!"),
    (51, -1, "Several diamonds"),
    (51, 0, "There are diamonds here!"),
    (52, -1, "Bars of silver"),
    (52, 0, "There are bars of silver here!"),
    (53, -1, "Precious jewelry"),
    (53, 0, "There is precious jewelry here!"),
    (54, -1, "Rare coins"),
    (54, 0, "There are many coins here!"),
    (55, -1, "Treasure chest"),
    (55, 0, "The pirate's treasure chest is here!"),
    (56, -1, "Golden eggs"),
    (56, 0, "There is a large nest here, full of golden eggs!"),
    (56, 1, "The nest of golden eggs has vanished!"),
    (56, 2, "Done!"),
    (57, -1, "Jeweled trident"),
    (57, 0, "There is a jewel-encrusted trident here!"),
    (58, -1, "Ming vase"),
    (58, 0, "There is a delicate, precious, ming vase here!"),
    (
        58,
        1,
        "The vase is now resting, delicately, on a velvet pillow.",
    ),
    (
        58,
        2,
        "The floor is littered with worthless shards of pottery.",
    ),
    (58, 3, "The ming vase drops with a delicate crash."),
    (59, -1, "Egg-sized emerald"),
    (
        59,
        0,
        "There is an emerald here the size of a plover's egg!",
    ),
    (60, -1, "Platinum pyramid"),
    (
        60,
        0,
        "There is a platinum pyramid here, 8 inches on a side!",
    ),
    (61, -1, "Glistening pearl"),
    (61, 0, "Off to one side lies a glistening pearl!"),
    (62, -1, "Persian rug"),
    (62, 0, "There is a persian rug spread out on the floor!"),
    (62, 1, "The dragon is sprawled out on a persian rug!!"),
    (63, -1, "Rare spices"),
    (63, 0, "There are rare spices here!"),
    (64, -1, "Golden chain"),
    (
        64,
        0,
        "There is a golden chain lying in a heap on the floor!",
    ),
    (
        64,
        1,
        "The bear is locked to the wall with a golden chain!",
    ),
    (64, 2, "There is a golden chain locked to the wall!"),
];
